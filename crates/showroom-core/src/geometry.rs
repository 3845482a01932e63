//! # Geometry
//!
//! Integer rectangle arithmetic for visibility computation.
//!
//! All values are CSS pixels stored as `i64`. Visibility is reported as an
//! integer area ratio ([`VisibleFraction`]) so that threshold comparisons stay
//! exact and float-free.

use crate::threshold::PERMILLE_SCALE;
use crate::ShowroomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// RECT
// =============================================================================

/// An axis-aligned rectangle in CSS pixels.
///
/// Negative sizes are treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Create a rectangle, clamping negative sizes to zero.
    #[must_use]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Build a rectangle from its four edges.
    #[must_use]
    pub fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> i64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width.max(0))
    }

    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height.max(0))
    }

    /// Area in square pixels.
    ///
    /// Both sides fit in 63 bits, so the product always fits in `u128`.
    #[must_use]
    pub fn area(&self) -> u128 {
        let w = self.width.max(0) as u128;
        let h = self.height.max(0) as u128;
        w.saturating_mul(h)
    }

    /// Whether the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether a point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains_point(&self, x: i64, y: i64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Apply an edge margin to this rectangle.
    ///
    /// Positive insets grow the rectangle outward, negative insets shrink it.
    /// Shrinking past zero yields an empty rectangle.
    #[must_use]
    pub fn expand(&self, margin: &Insets) -> Self {
        Self::from_edges(
            self.left().saturating_sub(margin.left),
            self.top().saturating_sub(margin.top),
            self.right().saturating_add(margin.right),
            self.bottom().saturating_add(margin.bottom),
        )
    }

    /// The overlapping region of two rectangles.
    ///
    /// Returns `None` when the overlap has zero area (disjoint or only
    /// touching along an edge).
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::from_edges(left, top, right, bottom))
    }
}

// =============================================================================
// INSETS (EDGE MARGIN)
// =============================================================================

/// Four independent edge adjustments applied to the viewport.
///
/// Follows CSS `rootMargin` semantics: positive values extend the effective
/// viewport, negative values pull its edges inward. Serialized as CSS
/// shorthand (`"0px 0px -50px 0px"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Insets {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl Insets {
    /// No adjustment.
    pub const ZERO: Insets = Insets {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// Create insets in CSS order: top, right, bottom, left.
    #[must_use]
    pub const fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same adjustment on every edge.
    #[must_use]
    pub const fn uniform(value: i64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl FromStr for Insets {
    type Err = ShowroomError;

    /// Parse CSS margin shorthand with 1 to 4 pixel lengths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShowroomError::InvalidMargin(s.to_string());

        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(invalid)?;

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [vertical, horizontal] => Ok(Self::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(invalid()),
        }
    }
}

/// Parse a single length: `0`, `12px`, `-50px`, `+4px`.
fn parse_px(token: &str) -> Option<i64> {
    let number = if token == "0" {
        token
    } else {
        token.strip_suffix("px")?
    };

    let digits = number
        .strip_prefix('-')
        .or_else(|| number.strip_prefix('+'))
        .unwrap_or(number);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl TryFrom<String> for Insets {
    type Error = ShowroomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Insets> for String {
    fn from(insets: Insets) -> Self {
        insets.to_string()
    }
}

// =============================================================================
// VISIBLE FRACTION
// =============================================================================

/// The share of a region's area that lies inside the effective viewport.
///
/// Stored as an exact integer ratio `visible / total` with
/// `visible <= total` and `total > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleFraction {
    visible: u128,
    total: u128,
}

impl VisibleFraction {
    /// Nothing visible.
    pub const NONE: VisibleFraction = VisibleFraction {
        visible: 0,
        total: 1,
    };

    /// Entirely visible.
    pub const FULL: VisibleFraction = VisibleFraction {
        visible: 1,
        total: 1,
    };

    /// Create a fraction, clamping `visible` into `0..=total`.
    ///
    /// A zero `total` yields [`VisibleFraction::NONE`].
    #[must_use]
    pub fn new(visible: u128, total: u128) -> Self {
        if total == 0 {
            return Self::NONE;
        }
        Self {
            visible: visible.min(total),
            total,
        }
    }

    /// Compute how much of `target` lies inside `root`.
    ///
    /// A zero-area target counts as fully visible when its origin sits inside
    /// `root` (edges included) and invisible otherwise.
    #[must_use]
    pub fn of(target: &Rect, root: &Rect) -> Self {
        if root.is_empty() {
            return Self::NONE;
        }
        if target.is_empty() {
            return if root.contains_point(target.x, target.y) {
                Self::FULL
            } else {
                Self::NONE
            };
        }

        match target.intersection(root) {
            Some(overlap) => Self::new(overlap.area(), target.area()),
            None => Self::NONE,
        }
    }

    #[must_use]
    pub fn visible(&self) -> u128 {
        self.visible
    }

    #[must_use]
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Whether any part of the region is visible.
    #[must_use]
    pub fn is_intersecting(&self) -> bool {
        self.visible > 0
    }

    /// Whether `visible / total >= permille / 1000`, exactly.
    ///
    /// `total` is split as `whole * 1000 + rest`, which keeps every product
    /// below `u128::MAX` for any pair of `i64` rectangles.
    #[must_use]
    pub fn reaches_permille(&self, permille: u16) -> bool {
        let scale = u128::from(PERMILLE_SCALE);
        let permille = u128::from(permille);
        let whole = self.total / scale;
        let rest = self.total % scale;

        match self.visible.checked_sub(permille.saturating_mul(whole)) {
            Some(excess) => excess.saturating_mul(scale) >= permille.saturating_mul(rest),
            None => false,
        }
    }

    /// The fraction rounded down to permille (0..=1000).
    #[must_use]
    pub fn permille(&self) -> u16 {
        let (mut low, mut high) = (0u16, PERMILLE_SCALE);
        while low < high {
            let mid = low + (high - low).div_ceil(2);
            if self.reaches_permille(mid) {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        low
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_empty() {
        let rect = Rect::new(0, 0, -10, 20);
        assert!(rect.is_empty());
        assert_eq!(rect.area(), 0);
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersection(&b), Some(Rect::new(50, 50, 50, 50)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 100, 100);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn negative_margin_shrinks_bottom_edge() {
        let viewport = Rect::new(0, 0, 1280, 800);
        let effective = viewport.expand(&Insets::new(0, 0, -50, 0));
        assert_eq!(effective, Rect::new(0, 0, 1280, 750));
    }

    #[test]
    fn positive_margin_grows_every_edge() {
        let viewport = Rect::new(0, 0, 100, 100);
        let effective = viewport.expand(&Insets::uniform(10));
        assert_eq!(effective, Rect::new(-10, -10, 120, 120));
    }

    #[test]
    fn overshrunk_viewport_becomes_empty() {
        let viewport = Rect::new(0, 0, 100, 100);
        let effective = viewport.expand(&Insets::new(0, 0, -200, 0));
        assert!(effective.is_empty());
    }

    #[test]
    fn parse_margin_shorthand() {
        assert_eq!("10px".parse::<Insets>(), Ok(Insets::uniform(10)));
        assert_eq!("0 20px".parse::<Insets>(), Ok(Insets::new(0, 20, 0, 20)));
        assert_eq!(
            "1px 2px 3px".parse::<Insets>(),
            Ok(Insets::new(1, 2, 3, 2))
        );
        assert_eq!(
            "0px 0px -50px 0px".parse::<Insets>(),
            Ok(Insets::new(0, 0, -50, 0))
        );
    }

    #[test]
    fn parse_margin_rejects_junk() {
        for bad in ["", "10", "10em", "1px 2px 3px 4px 5px", "-px", "1.5px", "--2px"] {
            assert!(bad.parse::<Insets>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn margin_display_roundtrips() {
        let insets = Insets::new(0, 0, -50, 0);
        assert_eq!(insets.to_string(), "0px 0px -50px 0px");
        assert_eq!(insets.to_string().parse::<Insets>(), Ok(insets));
    }

    #[test]
    fn fraction_of_half_visible_region() {
        let root = Rect::new(0, 0, 100, 100);
        let target = Rect::new(0, 50, 100, 100);
        let fraction = VisibleFraction::of(&target, &root);
        assert_eq!(fraction.permille(), 500);
        assert!(fraction.is_intersecting());
    }

    #[test]
    fn fraction_of_offscreen_region_is_none() {
        let root = Rect::new(0, 0, 100, 100);
        let target = Rect::new(0, 400, 100, 100);
        assert_eq!(VisibleFraction::of(&target, &root), VisibleFraction::NONE);
    }

    #[test]
    fn zero_area_region_inside_root_is_full() {
        let root = Rect::new(0, 0, 100, 100);
        let target = Rect::new(10, 10, 0, 0);
        assert_eq!(VisibleFraction::of(&target, &root), VisibleFraction::FULL);

        let outside = Rect::new(10, 500, 0, 0);
        assert_eq!(VisibleFraction::of(&outside, &root), VisibleFraction::NONE);
    }

    #[test]
    fn huge_regions_keep_exact_fractions() {
        // Both areas exceed u64::MAX; a quarter of the target is visible.
        let root = Rect::new(0, 0, 1 << 40, 1 << 40);
        let target = Rect::new(0, 1 << 39, 1 << 40, 1 << 41);
        let fraction = VisibleFraction::of(&target, &root);

        assert!(fraction.visible() > u128::from(u64::MAX));
        assert_eq!(fraction.total(), fraction.visible() * 4);
        assert_eq!(fraction.permille(), 250);
        assert!(fraction.reaches_permille(250));
        assert!(!fraction.reaches_permille(251));
        assert!(!fraction.reaches_permille(1000));
    }

    #[test]
    fn permille_rounds_down() {
        assert_eq!(VisibleFraction::new(1, 3).permille(), 333);
        assert_eq!(VisibleFraction::new(2, 3).permille(), 666);
        assert_eq!(VisibleFraction::NONE.permille(), 0);
        assert_eq!(VisibleFraction::FULL.permille(), 1000);
    }

    #[test]
    fn extreme_rects_do_not_overflow() {
        let root = Rect::new(0, 0, i64::MAX, i64::MAX);
        let target = Rect::new(0, i64::MAX / 2, i64::MAX, i64::MAX);
        let fraction = VisibleFraction::of(&target, &root);
        assert!(fraction.visible() < fraction.total());
        assert_eq!(fraction.permille(), 500);
        assert!(!fraction.reaches_permille(1000));
    }

    #[test]
    fn fraction_clamps_visible_to_total() {
        let fraction = VisibleFraction::new(20, 10);
        assert_eq!(fraction.visible(), 10);
        assert_eq!(fraction.permille(), 1000);
    }
}
