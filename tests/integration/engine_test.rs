//! Integration tests for the time-domain engine against descriptor fixtures

use std::cell::RefCell;
use std::rc::Rc;

use cutline::descriptor::CutEdge;
use cutline::timeline::DiscardReason;
use cutline::{EngineEvent, MediaDescriptor, Poi, PoiKind, PointOfInterest, TimeDomainEngine};

use crate::helpers::{engine_for, load_fixture};

fn markers(points: &[Poi]) -> Vec<f64> {
    points.iter().map(|p| p.marker()).collect()
}

fn labels(points: &[Poi]) -> Vec<&str> {
    points.iter().filter_map(|p| p.label()).collect()
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn valid_cut_filters_timecodes_into_cut_domain() {
    let engine = engine_for("scenario.json", Some(6000.0));

    assert!(engine.cuts_activated());
    assert_eq!(engine.cut_duration(), 1200.0);

    let timecodes = engine.media_points_of_interest(PoiKind::Timecodes);
    // real 0 is synthesized at 0, real 1800 lands at 600, real 3000 is past the end
    assert_eq!(markers(&timecodes), vec![0.0, 600.0]);
    assert_eq!(labels(&timecodes), vec!["slides/1-small.png", "slides/2-small.png"]);
}

#[test]
fn reversed_cut_is_discarded() {
    let engine = engine_for("reversed_cut.json", Some(6000.0));

    assert!(!engine.cuts_activated());
    assert_eq!(engine.cut_duration(), 6000.0);
    assert_eq!(engine.duration(), 6000.0);
    assert_eq!(
        markers(&engine.media_points_of_interest(PoiKind::Timecodes)),
        vec![0.0, 1800.0, 3000.0]
    );
}

#[test]
fn accessors_answer_before_duration_is_known() {
    let media = MediaDescriptor {
        cut: vec![CutEdge::begin(1200.0)],
        ..MediaDescriptor::default()
    };
    let engine = TimeDomainEngine::with_media(media);

    assert!(engine.cuts_activated());
    assert_eq!(engine.cut_start(), 1200.0);
    assert_eq!(engine.cut_end(), 0.0);
    assert_eq!(engine.cut_duration(), 0.0);
    assert_eq!(engine.duration(), 0.0);
    assert_eq!(engine.percent(1800.0), 0.0);
}

#[test]
fn cut_percent_clamps_past_the_end_edge() {
    let engine = engine_for("scenario.json", Some(6000.0));

    assert_eq!(engine.cut_percent(50.0), 100.0);
    assert_eq!(engine.cut_percent(10.0), 0.0);
    assert_eq!(engine.cut_percent(30.0), 50.0);
}

#[test]
fn nothing_is_active_before_the_first_chapter() {
    let engine = engine_for("uncut.json", None);

    assert!(!engine.cuts_activated());
    assert_eq!(engine.find_point_of_interest(PoiKind::Chapters, 0.0), None);

    let opening = engine
        .find_point_of_interest(PoiKind::Chapters, 240.0)
        .expect("Opening should be active at its marker");
    assert_eq!(opening.label(), Some("Opening"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn cut_time_inverts_real_time() {
    let engine = engine_for("scenario.json", Some(6000.0));

    for cut_time in [0.0, 1.5, 600.0, 1200.0, 4800.0] {
        let real = engine.real_time(cut_time);
        assert!(real >= engine.cut_start());
        assert_eq!(engine.cut_time(real), cut_time);
    }
}

#[test]
fn cut_time_is_never_negative() {
    let engine = engine_for("scenario.json", Some(6000.0));

    for real in [-500.0, 0.0, 600.0, 1199.0] {
        assert_eq!(engine.cut_time(real), 0.0);
    }
}

#[test]
fn inactive_cut_returns_every_entry_unchanged() {
    let mut engine = engine_for("scenario.json", Some(6000.0));
    engine.set_cuts_status(false);

    let media = engine.media().expect("media is assigned");
    for kind in PoiKind::ALL {
        assert_eq!(engine.media_points_of_interest(kind), media.points(kind));
    }
}

#[test]
fn reassigning_the_same_media_is_idempotent() {
    let mut engine = engine_for("scenario.json", None);
    let state = engine.cut_state().clone();
    let points: Vec<_> = PoiKind::ALL
        .iter()
        .map(|kind| engine.media_points_of_interest(*kind))
        .collect();

    engine.set_media(Some(load_fixture("scenario.json")));

    assert_eq!(engine.cut_state(), &state);
    for (kind, expected) in PoiKind::ALL.iter().zip(points) {
        assert_eq!(engine.media_points_of_interest(*kind), expected);
    }
}

#[test]
fn find_returns_none_before_first_entry_for_every_collection() {
    let engine = engine_for("scenario.json", Some(6000.0));

    for kind in PoiKind::ALL {
        let points = engine.media_points_of_interest(kind);
        let first = points.first().expect("fixture collections are non-empty");
        assert_eq!(
            engine.find_point_of_interest(kind, first.marker() - 1.0),
            None
        );
    }
}

// ============================================================================
// Filtering details
// ============================================================================

#[test]
fn preceding_chapter_is_synthesized_at_zero() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let chapters = engine.media_points_of_interest(PoiKind::Chapters);

    assert_eq!(markers(&chapters), vec![0.0, 300.0]);
    assert_eq!(labels(&chapters), vec!["Intro", "Body"]);
}

#[test]
fn tag_on_the_begin_edge_suppresses_synthesis() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let tags = engine.media_points_of_interest(PoiKind::Tags);

    assert_eq!(markers(&tags), vec![0.0, 800.0]);
    assert_eq!(labels(&tags), vec!["start", "demo"]);
}

#[test]
fn unknown_fields_survive_filtering() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let tags = engine.tags();

    assert_eq!(tags[1].extra.get("color"), Some(&serde_json::json!("red")));
}

#[test]
fn filtering_does_not_touch_the_stored_media() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let _ = engine.media_points_of_interest(PoiKind::Timecodes);

    let media = engine.media().expect("media is assigned");
    let stored: Vec<f64> = media.timecodes.iter().map(|t| t.timecode).collect();
    assert_eq!(stored, vec![0.0, 1800.0, 3000.0]);
}

#[test]
fn find_walks_the_filtered_chapters() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let at = |time| {
        engine
            .find_point_of_interest(PoiKind::Chapters, time)
            .and_then(|poi| poi.label().map(str::to_string))
    };

    assert_eq!(at(0.0).as_deref(), Some("Intro"));
    assert_eq!(at(299.0).as_deref(), Some("Intro"));
    assert_eq!(at(300.0).as_deref(), Some("Body"));
    assert_eq!(at(5000.0).as_deref(), Some("Body"));
}

#[test]
fn timecode_images_are_keyed_by_cut_time() {
    let engine = engine_for("scenario.json", Some(6000.0));
    let images = engine.media_timecodes_by_time();

    let keys: Vec<f64> = images.keys().map(|key| key.millis()).collect();
    assert_eq!(keys, vec![0.0, 600.0]);

    let first = images.values().next().expect("at least one image");
    assert_eq!(first.small.as_deref(), Some("slides/1-small.png"));
    assert_eq!(first.large.as_deref(), Some("slides/1.png"));
}

#[test]
fn timecode_images_follow_the_cuts_toggle() {
    let mut engine = engine_for("scenario.json", Some(6000.0));
    let keys = |engine: &TimeDomainEngine| -> Vec<f64> {
        engine
            .media_timecodes_by_time()
            .keys()
            .map(|key| key.millis())
            .collect()
    };
    assert_eq!(keys(&engine), vec![0.0, 600.0]);

    engine.set_cuts_status(false);
    assert_eq!(keys(&engine), vec![0.0, 1800.0, 3000.0]);

    engine.set_cuts_status(true);
    assert_eq!(keys(&engine), vec![0.0, 600.0]);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn short_duration_discards_cut_and_notifies() {
    let mut engine = engine_for("scenario.json", None);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event| sink.borrow_mut().push(*event));

    engine.set_real_duration(2000.0);

    assert!(!engine.cuts_activated());
    assert_eq!(
        *events.borrow(),
        vec![
            EngineEvent::CutDiscarded {
                reason: DiscardReason::BeyondDuration
            },
            EngineEvent::DurationChanged {
                real_duration: 2000.0
            },
        ]
    );
    assert_eq!(engine.media_points_of_interest(PoiKind::Timecodes).len(), 3);
}

#[test]
fn clearing_media_resets_every_accessor() {
    let mut engine = engine_for("scenario.json", Some(6000.0));
    engine.set_media(None);

    assert!(engine.media().is_none());
    assert!(!engine.cuts_activated());
    assert_eq!(engine.real_duration(), None);
    assert_eq!(engine.duration(), 0.0);
    for kind in PoiKind::ALL {
        assert!(engine.media_points_of_interest(kind).is_empty());
        assert_eq!(engine.find_point_of_interest(kind, 0.0), None);
    }
}
