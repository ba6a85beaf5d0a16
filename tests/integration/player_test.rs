//! Integration tests for simulated playback through the engine

use cutline::config::TimeFormat;
use cutline::player::render::{marker_percents, render_progress_line};
use cutline::player::{HighlightTracker, PlaybackBackend, PlayerSession, SimulatedBackend};
use cutline::{PoiKind, PointOfInterest};

use crate::helpers::engine_for;

fn session(delay: f64) -> PlayerSession<SimulatedBackend> {
    let engine = engine_for("scenario.json", None);
    let backend = SimulatedBackend::new(6000.0).with_duration_delay(delay);
    PlayerSession::new(engine, backend, HighlightTracker::new(&[PoiKind::Chapters]))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn playback_runs_from_cut_start_to_cut_end() {
    let mut session = session(0.0);
    session.start();
    assert_eq!(session.backend().position(), 1200.0);

    let mut highlights = Vec::new();
    let mut frames = 0;
    loop {
        let (snapshot, changes) = session.tick();
        frames += 1;
        highlights.extend(
            changes
                .into_iter()
                .filter_map(|c| c.current.and_then(|poi| poi.label().map(str::to_string))),
        );
        if snapshot.finished {
            assert!(approx(snapshot.time, 1200.0));
            assert!(approx(snapshot.percent, 100.0));
            break;
        }
        assert!(frames < 10, "playback never reached the end edge");
        session.backend_mut().advance(300.0);
    }

    assert_eq!(frames, 5);
    assert_eq!(highlights, vec!["Intro", "Body"]);
    assert_eq!(session.backend().position(), 2400.0);
}

#[test]
fn late_duration_is_picked_up_on_tick() {
    let mut session = session(500.0);
    session.start();

    let (snapshot, _) = session.tick();
    assert_eq!(session.engine().real_duration(), None);
    assert_eq!(snapshot.duration, 0.0);
    assert!(!snapshot.finished);

    session.backend_mut().advance(600.0);
    let (snapshot, _) = session.tick();
    assert_eq!(session.engine().real_duration(), Some(6000.0));
    assert_eq!(snapshot.duration, 1200.0);
    assert!(approx(snapshot.time, 600.0));
    assert!(approx(snapshot.percent, 50.0));
}

#[test]
fn seeking_between_chapters_stays_in_the_cut() {
    let mut session = session(0.0);
    session.start();

    assert!(session.seek_next(PoiKind::Chapters));
    assert_eq!(session.backend().position(), 1500.0);
    assert!(!session.seek_next(PoiKind::Chapters));

    assert!(session.seek_previous(PoiKind::Chapters));
    assert_eq!(session.backend().position(), 1200.0);
    assert!(!session.seek_previous(PoiKind::Chapters));

    session.seek_percent(50.0);
    assert_eq!(session.backend().position(), 1800.0);
}

#[test]
fn disabling_cuts_switches_to_the_real_domain() {
    let mut session = session(0.0);
    session.start();
    session.tick();

    session.set_cuts_status(false);
    let (snapshot, changes) = session.tick();

    assert_eq!(snapshot.duration, 6000.0);
    assert!(approx(snapshot.time, 1200.0));
    assert!(approx(snapshot.percent, 20.0));
    // Intro is still the active chapter at real 1200, reported again after the reset
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].current.as_ref().and_then(|poi| poi.label()),
        Some("Intro")
    );
}

#[test]
fn progress_line_shows_cut_domain_markers() {
    let mut session = session(0.0);
    session.start();
    let (snapshot, _) = session.tick();

    let markers = marker_percents(session.engine(), PoiKind::Chapters);
    assert_eq!(markers.len(), 2);
    assert!(approx(markers[0], 0.0));
    assert!(approx(markers[1], 25.0));

    let line = render_progress_line(60, &snapshot, &markers, TimeFormat::Clock, false);
    assert!(line.contains("00:00"), "line: {}", line);
    assert!(line.contains("00:01"), "line: {}", line);
    assert!(!line.contains('\x1b'));
}
