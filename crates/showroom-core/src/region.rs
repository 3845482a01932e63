//! # Region
//!
//! Per-region reveal state.
//!
//! A region starts `Pending` and moves to `Revealed` at most once. There is no
//! path back and no error state.

use crate::RegionId;
use serde::{Deserialize, Serialize};

/// Reveal lifecycle of a single region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Not yet sufficiently visible.
    #[default]
    Pending,
    /// Became visible at least once. Terminal.
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// A page region under observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    id: RegionId,
    state: RevealState,
}

impl Region {
    /// Create a pending region.
    #[must_use]
    pub fn new(id: RegionId) -> Self {
        Self {
            id,
            state: RevealState::Pending,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RegionId {
        &self.id
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Move to `Revealed`.
    ///
    /// Returns `true` only for the transition itself; later calls are no-ops
    /// returning `false`.
    pub fn reveal(&mut self) -> bool {
        if self.state.is_revealed() {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
