//! # Reveal Observer
//!
//! Watches a declared set of regions and reveals each one exactly once, the
//! first time its visible fraction reaches the threshold.
//!
//! ## Seams
//!
//! - [`VisibilityHost`]: where geometry comes from (a browser, a replay
//!   document, a test fixture). A host without a viewport means the visibility
//!   primitive is unavailable, and everything reveals eagerly.
//! - [`RevealMarker`]: the presentation-only side effect applied on reveal.
//!   The observer never looks at what the marker does.
//!
//! ## Evaluation paths
//!
//! - [`ObserverHandle::evaluate`]: scroll/resize fallback. Computes each
//!   watched region against the viewport adjusted by the edge margin.
//! - [`ObserverHandle::deliver`]: platform path. Applies a batch of
//!   pre-computed intersection entries.
//!
//! Both paths prune a region from the watch set as soon as it reveals, so
//! repeated or coalesced notifications can never reveal twice.

use crate::geometry::{Insets, Rect, VisibleFraction};
use crate::region::{Region, RevealState};
use crate::threshold::Threshold;
use crate::RegionId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Default marking class applied to revealed regions.
pub const DEFAULT_REVEAL_CLASS: &str = "animate-fade-in";

/// Default edge margin: trigger 50px before the region clears the bottom edge.
pub const DEFAULT_MARGIN: Insets = Insets::new(0, 0, -50, 0);

/// What "sufficiently visible" means for every watched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Minimum visible fraction.
    pub threshold: Threshold,
    /// Adjustment to the effective viewport.
    pub margin: Insets,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            margin: DEFAULT_MARGIN,
        }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn new(threshold: Threshold, margin: Insets) -> Self {
        Self { threshold, margin }
    }
}

// =============================================================================
// HOST SEAMS
// =============================================================================

/// Source of viewport and region geometry.
pub trait VisibilityHost {
    /// The current viewport, or `None` when visibility cannot be observed at
    /// all in this environment.
    fn viewport(&self) -> Option<Rect>;

    /// Bounding rectangle of a region, in the same coordinate space as the
    /// viewport. `None` when the region is gone or cannot be measured.
    fn bounds(&self, region: &RegionId) -> Option<Rect>;
}

/// Presentation-only side effect applied once per revealed region.
pub trait RevealMarker {
    fn mark(&mut self, region: &RegionId);
}

/// Marker that does nothing; callers read state from the handle instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMarker;

impl RevealMarker for NoopMarker {
    fn mark(&mut self, _region: &RegionId) {}
}

/// Marker that records the CSS class toggled onto each revealed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMarker {
    class: String,
    marked: BTreeSet<RegionId>,
}

impl Default for ClassMarker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_CLASS)
    }
}

impl ClassMarker {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            marked: BTreeSet::new(),
        }
    }

    /// The class this marker applies.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The class carried by `region`, if it has been marked.
    #[must_use]
    pub fn class_of(&self, region: &RegionId) -> Option<&str> {
        self.marked.contains(region).then_some(self.class.as_str())
    }

    /// Every marked region, in id order.
    #[must_use]
    pub fn marked(&self) -> &BTreeSet<RegionId> {
        &self.marked
    }
}

impl RevealMarker for ClassMarker {
    fn mark(&mut self, region: &RegionId) {
        self.marked.insert(region.clone());
    }
}

// =============================================================================
// INTERSECTION ENTRIES
// =============================================================================

/// One notification from a platform visibility primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionEntry {
    pub region: RegionId,
    pub fraction: VisibleFraction,
}

impl IntersectionEntry {
    #[must_use]
    pub fn new(region: impl Into<RegionId>, fraction: VisibleFraction) -> Self {
        Self {
            region: region.into(),
            fraction,
        }
    }
}

// =============================================================================
// OBSERVER
// =============================================================================

/// Entry point for starting observation.
pub struct RevealObserver;

impl RevealObserver {
    /// Begin watching `regions`.
    ///
    /// Duplicate ids collapse into one region. The first evaluation runs
    /// immediately against `host`, so anything already visible reveals before
    /// any scroll happens. An empty region set still yields a valid handle.
    pub fn start<I, H, M>(
        regions: I,
        options: RevealOptions,
        host: &H,
        marker: M,
    ) -> ObserverHandle<M>
    where
        I: IntoIterator<Item = RegionId>,
        H: VisibilityHost + ?Sized,
        M: RevealMarker,
    {
        let mut handle = ObserverHandle {
            options,
            regions: BTreeMap::new(),
            order: Vec::new(),
            watching: BTreeSet::new(),
            marker,
            stopped: false,
        };

        for id in regions {
            if handle.regions.contains_key(&id) {
                continue;
            }
            handle.regions.insert(id.clone(), Region::new(id.clone()));
            handle.watching.insert(id.clone());
            handle.order.push(id);
        }

        handle.evaluate(host);
        handle
    }
}

/// Handle to a running observation.
///
/// The handle owns all observation state, so nothing outlives it.
/// [`ObserverHandle::stop`] ends observation while keeping reveal state readable.
#[derive(Debug)]
pub struct ObserverHandle<M: RevealMarker = NoopMarker> {
    options: RevealOptions,
    /// Reveal state per region.
    regions: BTreeMap<RegionId, Region>,
    /// Declaration order, used for deterministic event order.
    order: Vec<RegionId>,
    /// Regions still pending and not released.
    watching: BTreeSet<RegionId>,
    marker: M,
    stopped: bool,
}

impl<M: RevealMarker> ObserverHandle<M> {
    /// Re-evaluate every watched region against the host's geometry.
    ///
    /// Returns newly revealed regions in declaration order.
    pub fn evaluate<H: VisibilityHost + ?Sized>(&mut self, host: &H) -> Vec<RegionId> {
        if self.stopped || self.watching.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<RegionId> = self
            .order
            .iter()
            .filter(|id| self.watching.contains(*id))
            .cloned()
            .collect();

        let Some(viewport) = host.viewport() else {
            // No visibility primitive: never keep content hidden.
            return candidates
                .into_iter()
                .filter(|id| self.reveal(id))
                .collect();
        };

        let root = viewport.expand(&self.options.margin);
        let threshold = self.options.threshold;

        candidates
            .into_iter()
            .filter(|id| {
                let fraction = host
                    .bounds(id)
                    .map(|bounds| VisibleFraction::of(&bounds, &root))
                    .unwrap_or(VisibleFraction::NONE);
                threshold.is_met(fraction)
            })
            .filter(|id| self.reveal(id))
            .collect()
    }

    /// Apply a batch of platform intersection entries.
    ///
    /// Entries for unknown, already revealed, or released regions are ignored.
    /// Returns newly revealed regions in batch order.
    pub fn deliver(&mut self, batch: &[IntersectionEntry]) -> Vec<RegionId> {
        if self.stopped {
            return Vec::new();
        }

        let threshold = self.options.threshold;
        batch
            .iter()
            .filter(|entry| threshold.is_met(entry.fraction))
            .filter(|entry| self.reveal(&entry.region))
            .map(|entry| entry.region.clone())
            .collect()
    }

    /// Release every watch.
    ///
    /// Idempotent. Reveal state stays readable afterwards.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.watching.clear();
    }

    /// Reveal a watched region and prune it. `false` if it was not watched.
    fn reveal(&mut self, id: &RegionId) -> bool {
        if !self.watching.remove(id) {
            return false;
        }
        let transitioned = self
            .regions
            .get_mut(id)
            .map(Region::reveal)
            .unwrap_or(false);
        if transitioned {
            self.marker.mark(id);
        }
        transitioned
    }

    /// State of a region, `None` if it was never declared.
    #[must_use]
    pub fn state(&self, id: &RegionId) -> Option<RevealState> {
        self.regions.get(id).map(Region::state)
    }

    #[must_use]
    pub fn is_revealed(&self, id: &RegionId) -> bool {
        self.state(id).is_some_and(RevealState::is_revealed)
    }

    /// Revealed regions in declaration order.
    pub fn revealed(&self) -> impl Iterator<Item = &RegionId> {
        self.order.iter().filter(|id| self.is_revealed(id))
    }

    /// Regions not yet revealed, in declaration order.
    pub fn pending(&self) -> impl Iterator<Item = &RegionId> {
        self.order.iter().filter(|id| !self.is_revealed(id))
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// Regions still actively watched.
    #[must_use]
    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    /// Total number of declared regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    #[must_use]
    pub fn marker(&self) -> &M {
        &self.marker
    }
}

// =============================================================================
// TESTS
// =============================================================================
