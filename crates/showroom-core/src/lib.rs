//! # Showroom Core
//!
//! The deterministic logic behind the showroom marketing site.
//!
//! The page itself is static: a fixed sequence of sections rendered from
//! hardcoded content. The one piece with runtime behavior is the Reveal
//! Observer, which marks each declared page region as revealed exactly once,
//! the first time it becomes sufficiently visible in the viewport.
//!
//! ## Layout
//!
//! - [`geometry`] / [`threshold`]: integer visibility arithmetic
//! - [`region`] / [`observer`]: the one-shot reveal state machine
//! - [`trace`]: a deterministic document host for replaying scroll sessions
//! - [`content`] / [`page`] / [`render`]: page composition and HTML output
//!
//! ## Constraints
//!
//! - No floating-point arithmetic (fractions are integer ratios)
//! - `BTreeMap`/`BTreeSet` only, for deterministic ordering
//! - No async, no I/O, no logging: hosts drive the observer

pub mod content;
pub mod geometry;
pub mod observer;
pub mod page;
pub mod region;
pub mod render;
pub mod threshold;
pub mod trace;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use geometry::{Insets, Rect, VisibleFraction};
pub use observer::{
    ClassMarker, IntersectionEntry, NoopMarker, ObserverHandle, RevealMarker, RevealObserver,
    RevealOptions, VisibilityHost,
};
pub use page::{Page, PageConfig, Section};
pub use region::{Region, RevealState};
pub use threshold::Threshold;

// =============================================================================
// REGION IDENTITY
// =============================================================================

/// Stable identity of a page region designated for scroll-triggered reveal.
///
/// Region ids are short slugs (`"stats"`, `"about"`) and order lexically,
/// which keeps every map keyed by them deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Create a region id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Configuration and input errors raised by the core.
///
/// The observer itself never fails: these only come out of parsing options
/// and validating replay input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowroomError {
    /// Threshold outside `(0, 1]` or not a decimal with at most 3 digits.
    #[error("invalid threshold '{0}': expected a decimal in (0, 1] with at most 3 fractional digits")]
    InvalidThreshold(String),

    /// Edge margin that is not 1-4 pixel lengths.
    #[error("invalid edge margin '{0}': expected 1-4 pixel lengths such as '0px 0px -50px 0px'")]
    InvalidMargin(String),

    /// A replay step referenced a region that was never declared.
    #[error("unknown region '{0}'")]
    UnknownRegion(RegionId),

    /// The same region id was declared twice in a layout.
    #[error("duplicate region '{0}'")]
    DuplicateRegion(RegionId),

    /// Reveal class that is not a plain CSS identifier.
    #[error("invalid reveal class '{0}': expected letters, digits, '-' or '_'")]
    InvalidClassName(String),
}

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, ShowroomError>;

// =============================================================================
// TESTS
// =============================================================================
