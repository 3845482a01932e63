//! # Scroll Trace Replay
//!
//! A deterministic document host for driving the Reveal Observer without a
//! browser.
//!
//! [`DocumentLayout`] places regions in document coordinates and exposes a
//! viewport that moves with the scroll offset. [`ScrollTrace`] is a recorded
//! session (initial layout plus scroll, resize and remove steps) and
//! [`replay`] runs it through the observer, reporting which step revealed
//! which region.

use crate::geometry::Rect;
use crate::observer::{NoopMarker, RevealObserver, RevealOptions, VisibilityHost};
use crate::{RegionId, ShowroomError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// DOCUMENT LAYOUT
// =============================================================================

/// Regions laid out in a scrolling document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    viewport: ViewportSize,
    scroll_y: i64,
    regions: BTreeMap<RegionId, Rect>,
    primitive_available: bool,
}

impl DocumentLayout {
    /// Empty document with the given viewport size, scrolled to the top.
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            scroll_y: 0,
            regions: BTreeMap::new(),
            primitive_available: true,
        }
    }

    /// Stack full-width sections top to bottom.
    pub fn stacked(
        viewport: ViewportSize,
        sections: &[(RegionId, i64)],
    ) -> Result<Self, ShowroomError> {
        let mut layout = Self::new(viewport);
        let mut top = 0i64;
        for (id, height) in sections {
            layout.place(id.clone(), Rect::new(0, top, viewport.width, *height))?;
            top = top.saturating_add((*height).max(0));
        }
        Ok(layout)
    }

    /// Simulate an environment without a visibility primitive.
    #[must_use]
    pub fn without_primitive(mut self) -> Self {
        self.primitive_available = false;
        self
    }

    /// Place a region. Fails if the id is already placed.
    pub fn place(&mut self, id: RegionId, rect: Rect) -> Result<(), ShowroomError> {
        if self.regions.contains_key(&id) {
            return Err(ShowroomError::DuplicateRegion(id));
        }
        self.regions.insert(id, rect);
        Ok(())
    }

    /// Remove a region from the document. Returns whether it was present.
    pub fn remove(&mut self, id: &RegionId) -> bool {
        self.regions.remove(id).is_some()
    }

    /// Scroll to an absolute offset, clamped at the top of the document.
    pub fn scroll_to(&mut self, y: i64) {
        self.scroll_y = y.max(0);
    }

    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn scroll_y(&self) -> i64 {
        self.scroll_y
    }

    /// Bottom edge of the lowest region.
    #[must_use]
    pub fn document_height(&self) -> i64 {
        self.regions.values().map(Rect::bottom).max().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, id: &RegionId) -> bool {
        self.regions.contains_key(id)
    }
}

impl VisibilityHost for DocumentLayout {
    fn viewport(&self) -> Option<Rect> {
        self.primitive_available.then(|| {
            Rect::new(0, self.scroll_y, self.viewport.width, self.viewport.height)
        })
    }

    fn bounds(&self, region: &RegionId) -> Option<Rect> {
        self.regions.get(region).copied()
    }
}

// =============================================================================
// TRACE FORMAT
// =============================================================================

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i64,
    pub height: i64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// A region as recorded in a trace: full width, at `top`, `height` tall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRegion {
    pub id: RegionId,
    pub top: i64,
    pub height: i64,
}

/// One recorded user or page action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollStep {
    /// Scroll to an absolute offset.
    Scroll(i64),
    /// The viewport changed size.
    Resize(ViewportSize),
    /// A region left the page.
    Remove(RegionId),
}

fn default_primitive() -> bool {
    true
}

/// A recorded scroll session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTrace {
    pub viewport: ViewportSize,
    pub regions: Vec<TraceRegion>,
    #[serde(default)]
    pub steps: Vec<ScrollStep>,
    /// Whether the environment has a visibility primitive.
    #[serde(default = "default_primitive")]
    pub primitive: bool,
}

impl ScrollTrace {
    /// Build a trace whose regions are stacked top to bottom.
    #[must_use]
    pub fn stacked(viewport: ViewportSize, sections: &[(RegionId, i64)]) -> Self {
        let mut top = 0i64;
        let regions = sections
            .iter()
            .map(|(id, height)| {
                let region = TraceRegion {
                    id: id.clone(),
                    top,
                    height: *height,
                };
                top = top.saturating_add((*height).max(0));
                region
            })
            .collect();

        Self {
            viewport,
            regions,
            steps: Vec::new(),
            primitive: true,
        }
    }

    /// Append a step.
    #[must_use]
    pub fn then(mut self, step: ScrollStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Build the initial document for this trace.
    pub fn layout(&self) -> Result<DocumentLayout, ShowroomError> {
        let mut layout = DocumentLayout::new(self.viewport);
        for region in &self.regions {
            layout.place(
                region.id.clone(),
                Rect::new(0, region.top, self.viewport.width, region.height),
            )?;
        }
        if !self.primitive {
            layout = layout.without_primitive();
        }
        Ok(layout)
    }

    /// Reject steps that reference undeclared regions.
    fn validate(&self) -> Result<(), ShowroomError> {
        let declared: BTreeSet<&RegionId> = self.regions.iter().map(|r| &r.id).collect();
        for step in &self.steps {
            if let ScrollStep::Remove(id) = step {
                if !declared.contains(id) {
                    return Err(ShowroomError::UnknownRegion(id.clone()));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// REPLAY
// =============================================================================

/// A region revealed at a given step. Step `0` is the initial evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEvent {
    pub step: usize,
    pub region: RegionId,
}

/// Outcome of replaying a trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Reveal transitions in the order they happened.
    pub events: Vec<RevealEvent>,
    /// Regions revealed by the end, in declaration order.
    pub revealed: Vec<RegionId>,
    /// Regions still pending, in declaration order.
    pub pending: Vec<RegionId>,
    /// Number of steps replayed (excluding the initial evaluation).
    pub steps: usize,
}

/// Replay a trace through a fresh observer.
pub fn replay(trace: &ScrollTrace, options: RevealOptions) -> Result<ReplayReport, ShowroomError> {
    trace.validate()?;
    let mut layout = trace.layout()?;

    let declared = trace.regions.iter().map(|r| r.id.clone());
    let mut handle = RevealObserver::start(declared, options, &layout, NoopMarker);

    let mut events: Vec<RevealEvent> = handle
        .revealed()
        .map(|region| RevealEvent {
            step: 0,
            region: region.clone(),
        })
        .collect();

    for (index, step) in trace.steps.iter().enumerate() {
        match step {
            ScrollStep::Scroll(y) => layout.scroll_to(*y),
            ScrollStep::Resize(viewport) => layout.resize(*viewport),
            ScrollStep::Remove(id) => {
                layout.remove(id);
            }
        }

        let step_number = index.saturating_add(1);
        events.extend(handle.evaluate(&layout).into_iter().map(|region| RevealEvent {
            step: step_number,
            region,
        }));
    }

    handle.stop();

    Ok(ReplayReport {
        events,
        revealed: handle.revealed().cloned().collect(),
        pending: handle.pending().cloned().collect(),
        steps: trace.steps.len(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;
    use crate::threshold::Threshold;

    fn sections() -> Vec<(RegionId, i64)> {
        vec![
            (RegionId::new("stats"), 400),
            (RegionId::new("about"), 600),
            (RegionId::new("features"), 700),
            (RegionId::new("contact"), 500),
        ]
    }

    fn options() -> RevealOptions {
        RevealOptions::new(Threshold::default(), Insets::ZERO)
    }

    #[test]
    fn stacked_layout_places_sections_end_to_end() {
        let layout = DocumentLayout::stacked(ViewportSize::new(1280, 800), &sections());
        let layout = layout.ok();
        assert_eq!(
            layout.as_ref().and_then(|l| l.bounds(&RegionId::new("about"))),
            Some(Rect::new(0, 400, 1280, 600))
        );
        assert_eq!(layout.map(|l| l.document_height()), Some(2200));
    }

    #[test]
    fn stacked_layout_rejects_duplicates() {
        let dup = vec![(RegionId::new("stats"), 100), (RegionId::new("stats"), 100)];
        let result = DocumentLayout::stacked(ViewportSize::new(1280, 800), &dup);
        assert_eq!(result, Err(ShowroomError::DuplicateRegion(RegionId::new("stats"))));
    }

    #[test]
    fn replay_reports_step_of_each_reveal() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections())
            .then(ScrollStep::Scroll(600))
            .then(ScrollStep::Scroll(1500));

        let report = replay(&trace, options());
        let report = report.ok();
        let events = report.as_ref().map(|r| r.events.clone()).unwrap_or_default();

        // 0..800 shows stats and 400px of about; 600..1400 shows features; 1500.. shows contact
        assert_eq!(
            events,
            vec![
                RevealEvent { step: 0, region: RegionId::new("stats") },
                RevealEvent { step: 0, region: RegionId::new("about") },
                RevealEvent { step: 1, region: RegionId::new("features") },
                RevealEvent { step: 2, region: RegionId::new("contact") },
            ]
        );
        assert_eq!(report.map(|r| r.pending.len()), Some(0));
    }

    #[test]
    fn scrolling_back_up_does_not_unreveal() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections())
            .then(ScrollStep::Scroll(2000))
            .then(ScrollStep::Scroll(0));
        let report = replay(&trace, options()).ok();
        assert_eq!(report.map(|r| r.revealed.len()), Some(4));
    }

    #[test]
    fn removed_region_is_left_pending() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections())
            .then(ScrollStep::Remove(RegionId::new("contact")))
            .then(ScrollStep::Scroll(1500));
        let report = replay(&trace, options()).ok();
        assert_eq!(
            report.map(|r| r.pending),
            Some(vec![RegionId::new("contact")])
        );
    }

    #[test]
    fn remove_of_undeclared_region_is_rejected() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections())
            .then(ScrollStep::Remove(RegionId::new("ghost")));
        assert_eq!(
            replay(&trace, options()),
            Err(ShowroomError::UnknownRegion(RegionId::new("ghost")))
        );
    }

    #[test]
    fn resize_can_reveal_without_scrolling() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 300), &sections())
            .then(ScrollStep::Resize(ViewportSize::new(1280, 1200)));
        let report = replay(&trace, options()).ok();
        let step_one: Vec<_> = report
            .map(|r| r.events.into_iter().filter(|e| e.step == 1).map(|e| e.region).collect())
            .unwrap_or_default();
        assert_eq!(step_one, vec![RegionId::new("about"), RegionId::new("features")]);
    }

    #[test]
    fn trace_without_primitive_reveals_at_start() {
        let mut trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections());
        trace.primitive = false;
        let report = replay(&trace, options()).ok();
        assert_eq!(
            report.map(|r| r.events.iter().all(|e| e.step == 0) && r.revealed.len() == 4),
            Some(true)
        );
    }

    #[test]
    fn steps_use_externally_tagged_json() {
        let trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections()[..1])
            .then(ScrollStep::Scroll(600))
            .then(ScrollStep::Resize(ViewportSize::new(800, 600)))
            .then(ScrollStep::Remove(RegionId::new("stats")));

        let value = serde_json::to_value(&trace).ok();
        let expected = serde_json::json!({
            "viewport": {"width": 1280, "height": 800},
            "regions": [{"id": "stats", "top": 0, "height": 400}],
            "steps": [
                {"scroll": 600},
                {"resize": {"width": 800, "height": 600}},
                {"remove": "stats"}
            ],
            "primitive": true
        });
        assert_eq!(value, Some(expected));
    }

    #[test]
    fn trace_json_defaults_steps_and_primitive() {
        let text = r#"{"viewport": {"width": 1280, "height": 800},
                       "regions": [{"id": "contact", "top": 3000, "height": 500}]}"#;
        let trace: Option<ScrollTrace> = serde_json::from_str(text).ok();
        assert_eq!(
            trace.map(|t| (t.steps.is_empty(), t.primitive, t.regions.len())),
            Some((true, true, 1))
        );
    }

    #[test]
    fn unknown_step_kind_is_rejected() {
        let text = r#"{"viewport": {"width": 1280, "height": 800},
                       "regions": [],
                       "steps": [{"teleport": 10}]}"#;
        assert!(serde_json::from_str::<ScrollTrace>(text).is_err());
    }
}
