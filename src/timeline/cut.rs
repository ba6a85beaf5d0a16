//! Cut model: the virtual trim applied to a media asset.
//!
//! Edges are stored in real-domain milliseconds. An invalid trim is never
//! clamped into shape: it is discarded and the state falls back to "no cut".

use tracing::{debug, warn};

use crate::descriptor::{CutEdge, EdgeType};

/// Why a cut was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Begin edge at or after the end edge
    Degenerate,
    /// Cut does not fit inside the real duration
    BeyondDuration,
}

/// Visible window of the real time domain while a cut is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutWindow {
    /// Real-domain start edge
    pub start: f64,
    /// Real-domain end edge; `None` while neither the end edge nor the real
    /// duration is known
    pub end: Option<f64>,
}

impl CutWindow {
    /// Whether a real-domain time lies inside the window (edges inclusive).
    pub fn contains(&self, real_time: f64) -> bool {
        real_time >= self.start && self.end.map_or(true, |end| real_time <= end)
    }
}

/// Derived trim state owned by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutState {
    cut_start: f64,
    cut_end: Option<f64>,
    cuts_activated: bool,
    /// The descriptor supplied a valid cut, whether or not it is switched on
    cut_supplied: bool,
    real_duration: Option<f64>,
}

impl CutState {
    /// State with no cut and no known duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the state from the cut edges of a media descriptor.
    ///
    /// Either edge may be absent. A begin edge below zero is raised to zero;
    /// a begin edge at or after the end edge discards the whole cut. The cut
    /// is only activated when `edges` is non-empty and valid.
    pub fn from_edges(edges: &[CutEdge]) -> Self {
        let mut state = Self::new();
        state.apply_edges(edges);
        state
    }

    /// Returns the discard reason when the edges were rejected.
    pub(crate) fn apply_edges(&mut self, edges: &[CutEdge]) -> Option<DiscardReason> {
        *self = Self::new();
        if edges.is_empty() {
            return None;
        }

        let mut begin: Option<f64> = None;
        let mut end: Option<f64> = None;
        for edge in edges {
            if !edge.value.is_finite() {
                warn!(edge = ?edge.edge_type, value = edge.value, "ignoring non-finite cut edge");
                continue;
            }
            let slot = match edge.edge_type {
                EdgeType::Begin => &mut begin,
                EdgeType::End => &mut end,
            };
            if slot.is_some() {
                warn!(edge = ?edge.edge_type, "duplicate cut edge, last one wins");
            }
            *slot = Some(edge.value);
        }

        self.cut_start = begin.unwrap_or(0.0).max(0.0);
        self.cut_end = end;

        if let Some(end) = self.cut_end {
            if self.cut_start >= end {
                debug!(start = self.cut_start, end, "discarding degenerate cut");
                self.discard();
                return Some(DiscardReason::Degenerate);
            }
        }

        self.cuts_activated = true;
        self.cut_supplied = true;
        debug!(start = self.cut_start, end = ?self.cut_end, "cut activated");
        None
    }

    /// Record the real duration of the asset.
    ///
    /// The cut is re-validated against `duration` before it is stored, so a
    /// trim that does not fit the authoritative duration is dropped. Negative
    /// or non-finite durations are ignored.
    pub fn set_real_duration(&mut self, duration: f64) -> Option<DiscardReason> {
        if !duration.is_finite() || duration < 0.0 {
            warn!(duration, "ignoring invalid real duration");
            return None;
        }

        let mut reason = None;
        let beyond_end = self.cut_end.map_or(false, |end| end > duration);
        if self.has_cut() && (self.cut_start >= duration || beyond_end) {
            debug!(
                start = self.cut_start,
                end = ?self.cut_end,
                duration,
                "discarding cut outside real duration"
            );
            self.discard();
            reason = Some(DiscardReason::BeyondDuration);
        }

        self.real_duration = Some(duration);
        reason
    }

    /// Enable or disable the cut without touching its edges.
    ///
    /// Enabling only takes effect while a valid cut is stored; a discarded
    /// or absent cut stays inactive.
    pub fn set_cuts_status(&mut self, activated: bool) {
        if activated && !self.cut_supplied {
            debug!("no cut to activate");
        }
        self.cuts_activated = activated && self.cut_supplied;
    }

    pub fn cuts_activated(&self) -> bool {
        self.cuts_activated
    }

    pub fn real_duration(&self) -> Option<f64> {
        self.real_duration
    }

    /// Stored edges, regardless of the activation flag.
    pub fn edges(&self) -> (f64, Option<f64>) {
        (self.cut_start, self.cut_end)
    }

    /// Real-domain start edge, or 0 while cuts are inactive.
    pub fn cut_start(&self) -> f64 {
        if self.cuts_activated {
            self.cut_start
        } else {
            0.0
        }
    }

    /// Real-domain end edge, or 0 while cuts are inactive.
    ///
    /// Without an explicit end edge this is the real duration, which reads
    /// as 0 until it is known.
    pub fn cut_end(&self) -> f64 {
        if !self.cuts_activated {
            return 0.0;
        }
        self.cut_end.or(self.real_duration).unwrap_or(0.0)
    }

    /// Visible real-domain window, `None` while cuts are inactive.
    pub fn window(&self) -> Option<CutWindow> {
        if !self.cuts_activated {
            return None;
        }
        Some(CutWindow {
            start: self.cut_start,
            end: self.cut_end.or(self.real_duration),
        })
    }

    fn has_cut(&self) -> bool {
        self.cuts_activated || self.cut_supplied
    }

    fn discard(&mut self) {
        self.cut_start = 0.0;
        self.cut_end = None;
        self.cuts_activated = false;
        self.cut_supplied = false;
    }
}
