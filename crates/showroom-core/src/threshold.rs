//! # Threshold
//!
//! Minimum visible fraction a region needs before it reveals.
//!
//! Stored in permille so that `0.1` is exactly `100` and comparisons against a
//! [`VisibleFraction`] stay exact integer comparisons.

use crate::geometry::VisibleFraction;
use crate::ShowroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permille scale: 1000 = the whole region.
pub const PERMILLE_SCALE: u16 = 1000;

/// Default threshold: one tenth of the region.
pub const DEFAULT_THRESHOLD_PERMILLE: u16 = 100;

/// A visibility threshold in `(0, 1]`, held as permille `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Threshold(u16);

impl Threshold {
    /// Create a threshold from permille.
    ///
    /// Fails for `0` and anything above `1000`.
    pub fn from_permille(permille: u16) -> Result<Self, ShowroomError> {
        if permille == 0 || permille > PERMILLE_SCALE {
            return Err(ShowroomError::InvalidThreshold(permille.to_string()));
        }
        Ok(Self(permille))
    }

    /// Require the whole region to be visible.
    #[must_use]
    pub const fn full() -> Self {
        Self(PERMILLE_SCALE)
    }

    #[must_use]
    pub fn permille(&self) -> u16 {
        self.0
    }

    /// Whether `fraction` reaches this threshold (`>=`).
    #[must_use]
    pub fn is_met(&self, fraction: VisibleFraction) -> bool {
        fraction.reaches_permille(self.0)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_PERMILLE)
    }
}

impl FromStr for Threshold {
    type Err = ShowroomError;

    /// Parse a decimal such as `0.1`, `0.25`, `1` or `1.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShowroomError::InvalidThreshold(s.to_string());
        let trimmed = s.trim();

        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) || frac.len() > 3 {
            return Err(invalid());
        }
        if trimmed.ends_with('.') {
            return Err(invalid());
        }

        let whole: u16 = whole.parse().map_err(|_| invalid())?;
        if whole > 1 {
            return Err(invalid());
        }

        let mut frac_permille: u16 = 0;
        for (place, digit) in [100u16, 10, 1].into_iter().zip(frac.bytes()) {
            frac_permille = frac_permille.saturating_add(place.saturating_mul(u16::from(digit - b'0')));
        }

        let permille = whole
            .saturating_mul(PERMILLE_SCALE)
            .saturating_add(frac_permille);
        Self::from_permille(permille).map_err(|_| invalid())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= PERMILLE_SCALE {
            return f.write_str("1");
        }
        let digits = format!("{:03}", self.0);
        write!(f, "0.{}", digits.trim_end_matches('0'))
    }
}

impl TryFrom<String> for Threshold {
    type Error = ShowroomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================
