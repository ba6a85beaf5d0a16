//! Conversions between the real and cut time domains.
//!
//! Every function here is a pure read of the current `CutState`. None of
//! them fail before the real duration is known: they answer 0, or pass the
//! input through unchanged where dropping it would lose a progress report.

use super::cut::CutState;

impl CutState {
    /// Real-domain time for a cut-domain time.
    ///
    /// Not bounds-checked: drag previews may ask for slightly out-of-range
    /// values.
    pub fn real_time(&self, cut_time: f64) -> f64 {
        cut_time + self.cut_start()
    }

    /// Cut-domain time for a real-domain time, floored at 0.
    pub fn cut_time(&self, real_time: f64) -> f64 {
        (real_time - self.cut_start()).max(0.0)
    }

    /// Length of the cut domain.
    ///
    /// 0 while the real duration is unknown. With cuts inactive the cut
    /// domain is the whole asset.
    pub fn cut_duration(&self) -> f64 {
        match self.real_duration() {
            None => 0.0,
            Some(real) if !self.cuts_activated() => real,
            Some(_) => self.cut_end() - self.cut_start(),
        }
    }

    /// Duration of whichever domain is active. Progress bars use this.
    pub fn duration(&self) -> f64 {
        if self.cuts_activated() {
            self.cut_duration()
        } else {
            self.real_duration().unwrap_or(0.0)
        }
    }

    /// Convert a position given in percent of the real duration into percent
    /// of the cut duration, clamped to `[0, 100]`.
    ///
    /// Passes the input through unchanged while the real duration is unknown.
    pub fn cut_percent(&self, real_percent: f64) -> f64 {
        let Some(real) = self.real_duration() else {
            return real_percent;
        };
        let cut_duration = self.cut_duration();
        if cut_duration <= 0.0 {
            return 0.0;
        }
        let real_time = real * (real_percent / 100.0);
        (((real_time - self.cut_start()) / cut_duration) * 100.0).clamp(0.0, 100.0)
    }

    /// Convert a span (not a position) given in percent of the real duration
    /// into percent of the cut duration, capped at 100.
    pub fn cut_duration_percent(&self, real_span_percent: f64) -> f64 {
        let Some(real) = self.real_duration() else {
            return real_span_percent;
        };
        let cut_duration = self.cut_duration();
        if cut_duration <= 0.0 {
            return 0.0;
        }
        ((real * real_span_percent / 100.0) / cut_duration * 100.0).min(100.0)
    }

    /// Position of a real-domain time in percent of the active domain.
    pub fn percent(&self, real_time: f64) -> f64 {
        let real = match self.real_duration() {
            Some(real) if real > 0.0 => real,
            _ => return 0.0,
        };
        let percent = real_time / real * 100.0;
        if self.cuts_activated() {
            self.cut_percent(percent)
        } else {
            percent
        }
    }

    /// Time in the active domain at `percent` of its duration.
    pub fn time_from_percent(&self, percent: f64) -> f64 {
        self.duration() * (percent / 100.0)
    }

    /// Time the UI should display for a real-domain time.
    pub fn time(&self, real_time: f64) -> f64 {
        if self.cuts_activated() {
            self.cut_time(real_time)
        } else {
            real_time
        }
    }
}
