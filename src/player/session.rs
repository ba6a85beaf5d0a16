//! Player session: a playback backend driven through the time-domain engine.
//!
//! The backend only knows real time. The session keeps the engine's duration
//! in sync with what the backend reports, turns seek gestures expressed in
//! the active domain back into real time, and reports when playback reaches
//! the end of the cut.

use tracing::debug;

use crate::descriptor::{PoiKind, PointOfInterest};
use crate::player::backend::PlaybackBackend;
use crate::player::tracker::{HighlightChange, HighlightTracker};
use crate::timeline::TimeDomainEngine;

/// Everything a progress bar needs for one frame, in the active domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    /// Display time (cut time while the cut is active)
    pub time: f64,
    /// Active duration
    pub duration: f64,
    /// Playhead position in percent of `duration`
    pub percent: f64,
    /// Buffered span ahead of the playhead in percent of `duration`
    pub buffered_percent: f64,
    /// Playback reached the end of the active domain
    pub finished: bool,
}

/// Engine, backend and highlight tracker wired together.
#[derive(Debug)]
pub struct PlayerSession<B: PlaybackBackend> {
    engine: TimeDomainEngine,
    backend: B,
    tracker: HighlightTracker,
}

impl<B: PlaybackBackend> PlayerSession<B> {
    pub fn new(engine: TimeDomainEngine, backend: B, tracker: HighlightTracker) -> Self {
        Self {
            engine,
            backend,
            tracker,
        }
    }

    pub fn engine(&self) -> &TimeDomainEngine {
        &self.engine
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn tracker(&self) -> &HighlightTracker {
        &self.tracker
    }

    /// Push the backend's duration into the engine when it appeared or
    /// changed. Returns true if the engine was updated.
    pub fn sync_duration(&mut self) -> bool {
        match self.backend.duration() {
            Some(duration) if self.engine.real_duration() != Some(duration) => {
                self.engine.set_real_duration(duration);
                true
            }
            _ => false,
        }
    }

    /// Position the backend at the start of the active domain.
    pub fn start(&mut self) {
        self.sync_duration();
        self.seek_cut_time(0.0);
    }

    /// Enable or disable the cut; highlights are recomputed on the next tick.
    pub fn set_cuts_status(&mut self, activated: bool) {
        self.engine.set_cuts_status(activated);
        self.tracker.reset();
    }

    /// Read the backend, update highlights and describe the current frame.
    pub fn tick(&mut self) -> (PlaybackSnapshot, Vec<HighlightChange>) {
        self.sync_duration();
        let position = self.backend.position();
        let changes = self.tracker.update(&self.engine, position);
        (self.snapshot_at(position), changes)
    }

    /// Current frame without touching highlight state.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshot_at(self.backend.position())
    }

    /// Seek to a position given in percent of the active duration.
    pub fn seek_percent(&mut self, percent: f64) {
        let time = self.engine.time_from_percent(percent.clamp(0.0, 100.0));
        self.seek_cut_time(time);
    }

    /// Seek to a display time (cut time while the cut is active).
    pub fn seek_cut_time(&mut self, time: f64) {
        let real = self.engine.real_time(time.max(0.0));
        debug!(time, real, "seeking");
        self.backend.seek(real);
    }

    /// Jump to the next entry of a collection after the current position.
    /// Returns false if there is none.
    pub fn seek_next(&mut self, kind: PoiKind) -> bool {
        let now = self.engine.time(self.backend.position());
        let next = self
            .engine
            .media_points_of_interest(kind)
            .iter()
            .map(|poi| poi.marker())
            .find(|&marker| marker > now);
        match next {
            Some(marker) => {
                self.seek_cut_time(marker);
                true
            }
            None => false,
        }
    }

    /// Jump to the last entry starting before the current position.
    /// Returns false if there is none.
    pub fn seek_previous(&mut self, kind: PoiKind) -> bool {
        let now = self.engine.time(self.backend.position());
        let previous = self
            .engine
            .media_points_of_interest(kind)
            .iter()
            .map(|poi| poi.marker())
            .filter(|&marker| marker < now)
            .last();
        match previous {
            Some(marker) => {
                self.seek_cut_time(marker);
                true
            }
            None => false,
        }
    }

    fn snapshot_at(&self, position: f64) -> PlaybackSnapshot {
        let engine = &self.engine;
        let duration = engine.duration();
        let mut time = engine.time(position);
        if duration > 0.0 {
            time = time.min(duration);
        }
        let buffered_percent = if engine.cuts_activated() {
            engine.cut_duration_percent(self.backend.buffered_percent())
        } else {
            self.backend.buffered_percent()
        };

        PlaybackSnapshot {
            time,
            duration,
            percent: engine.percent(position),
            buffered_percent,
            finished: engine.real_duration().is_some() && duration > 0.0 && time >= duration,
        }
    }
}
