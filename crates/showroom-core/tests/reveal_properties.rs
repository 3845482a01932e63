//! Property tests for the Reveal Observer.
//!
//! Drives random scroll sessions through a stacked document and checks the
//! one-shot invariants hold for every generated trace.

#![allow(clippy::unwrap_used, clippy::panic)]

use proptest::prelude::*;
use showroom_core::trace::{replay, DocumentLayout, ScrollStep, ScrollTrace, ViewportSize};
use showroom_core::{
    Insets, IntersectionEntry, NoopMarker, Rect, RegionId, RevealObserver, RevealOptions,
    RevealState, Threshold, VisibleFraction,
};
use std::collections::BTreeSet;

fn region_heights() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(50i64..1500, 1..8)
}

fn sections(heights: &[i64]) -> Vec<(RegionId, i64)> {
    heights
        .iter()
        .enumerate()
        .map(|(i, h)| (RegionId::new(format!("region-{i}")), *h))
        .collect()
}

fn options(permille: u16, bottom: i64) -> RevealOptions {
    RevealOptions::new(
        Threshold::from_permille(permille).unwrap(),
        Insets::new(0, 0, bottom, 0),
    )
}

proptest! {
    /// Once revealed, a region stays revealed for the rest of the session.
    #[test]
    fn reveal_is_monotonic(
        heights in region_heights(),
        scrolls in prop::collection::vec(0i64..10_000, 0..30),
        permille in 1u16..=1000,
        bottom in -200i64..200,
    ) {
        let viewport = ViewportSize::new(1280, 800);
        let mut layout = DocumentLayout::stacked(viewport, &sections(&heights)).unwrap();
        let ids: Vec<_> = sections(&heights).into_iter().map(|(id, _)| id).collect();
        let mut handle = RevealObserver::start(ids.clone(), options(permille, bottom), &layout, NoopMarker);

        let mut seen: BTreeSet<RegionId> = handle.revealed().cloned().collect();
        for y in scrolls {
            layout.scroll_to(y);
            handle.evaluate(&layout);
            let now: BTreeSet<RegionId> = handle.revealed().cloned().collect();
            prop_assert!(seen.is_subset(&now));
            seen = now;
        }
    }

    /// Each region appears in the event log at most once.
    #[test]
    fn each_region_reveals_at_most_once(
        heights in region_heights(),
        scrolls in prop::collection::vec(0i64..10_000, 0..30),
    ) {
        let mut trace = ScrollTrace::stacked(ViewportSize::new(1280, 800), &sections(&heights));
        for y in scrolls {
            trace = trace.then(ScrollStep::Scroll(y));
        }
        let report = replay(&trace, RevealOptions::default()).unwrap();

        let unique: BTreeSet<_> = report.events.iter().map(|e| e.region.clone()).collect();
        prop_assert_eq!(unique.len(), report.events.len());
        prop_assert_eq!(report.revealed.len() + report.pending.len(), heights.len());
    }

    /// Sub-threshold notifications never reveal; a crossing reveals exactly once.
    #[test]
    fn batching_tolerance(
        permille in 2u16..=1000,
        noise in prop::collection::vec(0u128..1000, 0..50),
    ) {
        let threshold = Threshold::from_permille(permille).unwrap();
        let host = DocumentLayout::new(ViewportSize::new(1280, 800));
        let mut handle = RevealObserver::start(
            vec![RegionId::new("stats")],
            RevealOptions::new(threshold, Insets::ZERO),
            &host,
            NoopMarker,
        );

        for visible in noise {
            let below = visible % u128::from(permille);
            let entry = IntersectionEntry::new("stats", VisibleFraction::new(below, 1000));
            prop_assert!(handle.deliver(&[entry]).is_empty());
        }
        prop_assert_eq!(handle.state(&RegionId::new("stats")), Some(RevealState::Pending));

        let crossing = IntersectionEntry::new("stats", VisibleFraction::new(u128::from(permille), 1000));
        prop_assert_eq!(handle.deliver(&[crossing.clone(), crossing.clone()]).len(), 1);
        prop_assert!(handle.deliver(&[crossing]).is_empty());
    }

    /// Visible fraction agrees with the threshold decision.
    #[test]
    fn threshold_matches_fraction(
        top in -2000i64..2000,
        height in 1i64..2000,
        permille in 1u16..=1000,
    ) {
        let root = Rect::new(0, 0, 1280, 800);
        let target = Rect::new(0, top, 1280, height);
        let fraction = VisibleFraction::of(&target, &root);
        let threshold = Threshold::from_permille(permille).unwrap();

        let expected = fraction.visible() * 1000 >= u128::from(permille) * fraction.total();
        prop_assert_eq!(threshold.is_met(fraction), expected);
        prop_assert!(fraction.visible() <= fraction.total());
    }

    /// Margin shorthand survives a display/parse cycle.
    #[test]
    fn margin_display_parses_back(
        top in -500i64..500,
        right in -500i64..500,
        bottom in -500i64..500,
        left in -500i64..500,
    ) {
        let insets = Insets::new(top, right, bottom, left);
        prop_assert_eq!(insets.to_string().parse::<Insets>(), Ok(insets));
    }
}

#[test]
fn fully_visible_region_reveals_before_any_scroll() {
    let layout = DocumentLayout::stacked(
        ViewportSize::new(1280, 800),
        &[(RegionId::new("stats"), 300)],
    )
    .unwrap();
    let handle = RevealObserver::start(
        vec![RegionId::new("stats")],
        RevealOptions::default(),
        &layout,
        NoopMarker,
    );
    assert!(handle.is_revealed(&RegionId::new("stats")));
}

#[test]
fn stop_after_full_reveal_changes_nothing() {
    let layout = DocumentLayout::stacked(
        ViewportSize::new(1280, 800),
        &[(RegionId::new("stats"), 300), (RegionId::new("about"), 300)],
    )
    .unwrap();
    let mut handle = RevealObserver::start(
        vec![RegionId::new("stats"), RegionId::new("about")],
        RevealOptions::default(),
        &layout,
        NoopMarker,
    );
    assert_eq!(handle.pending_count(), 0);

    handle.stop();
    handle.stop();
    assert_eq!(handle.revealed().count(), 2);
    assert!(handle.evaluate(&layout).is_empty());
}

#[test]
fn empty_start_returns_stoppable_handle() {
    let layout = DocumentLayout::new(ViewportSize::new(1280, 800));
    let mut handle = RevealObserver::start(
        Vec::<RegionId>::new(),
        options(100, -50),
        &layout,
        NoopMarker,
    );
    handle.stop();
    assert!(handle.is_stopped());
    assert_eq!(handle.region_count(), 0);
}
