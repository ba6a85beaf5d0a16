//! Playback backend abstraction.
//!
//! A backend plays the untrimmed asset and speaks real-domain milliseconds
//! only. Everything cut-aware happens in the session on top of it.

/// Minimal surface a playback backend exposes to the player.
pub trait PlaybackBackend {
    /// Current position in real-domain milliseconds.
    fn position(&self) -> f64;

    /// Real duration, once the backend knows it.
    fn duration(&self) -> Option<f64>;

    /// Length of the buffered range ahead of the position, in percent of the
    /// real duration.
    fn buffered_percent(&self) -> f64;

    /// Jump to a real-domain position.
    fn seek(&mut self, real_time: f64);
}

/// Backend driven by an explicit clock instead of a media element.
///
/// The duration is withheld until `duration_delay` milliseconds of playback
/// have elapsed, the way a network backend reports it late.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    position: f64,
    duration: f64,
    elapsed: f64,
    duration_delay: f64,
    buffer_ahead: f64,
}

impl SimulatedBackend {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            elapsed: 0.0,
            duration_delay: 0.0,
            buffer_ahead: 0.0,
        }
    }

    pub fn with_duration_delay(mut self, delay: f64) -> Self {
        self.duration_delay = delay.max(0.0);
        self
    }

    pub fn with_buffer_ahead(mut self, buffer_ahead: f64) -> Self {
        self.buffer_ahead = buffer_ahead.max(0.0);
        self
    }

    /// Advance the clock by `step` milliseconds of playback.
    pub fn advance(&mut self, step: f64) {
        let step = step.max(0.0);
        self.elapsed += step;
        self.position = (self.position + step).min(self.duration);
    }

    /// Whether the whole asset has been played.
    pub fn at_end(&self) -> bool {
        self.position >= self.duration
    }
}

impl PlaybackBackend for SimulatedBackend {
    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        if self.elapsed >= self.duration_delay {
            Some(self.duration)
        } else {
            None
        }
    }

    fn buffered_percent(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let ahead = self.buffer_ahead.min(self.duration - self.position);
        ahead / self.duration * 100.0
    }

    fn seek(&mut self, real_time: f64) {
        self.position = real_time.clamp(0.0, self.duration);
    }
}
