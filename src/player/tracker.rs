//! Highlight tracking for the "current marker" feature.
//!
//! The backend reports real-domain time periodically; the tracker converts
//! it to display time and reports which point of interest became active (or
//! inactive) in each watched collection since the previous report.

use crate::descriptor::{Poi, PoiKind};
use crate::timeline::TimeDomainEngine;

/// The active entry of one collection changed.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightChange {
    pub kind: PoiKind,
    /// Newly active entry, `None` when nothing is active any more
    pub current: Option<Poi>,
}

/// Remembers the active entry per watched collection.
#[derive(Debug, Clone)]
pub struct HighlightTracker {
    watched: Vec<(PoiKind, Option<Poi>)>,
}

impl HighlightTracker {
    pub fn new(kinds: &[PoiKind]) -> Self {
        let mut watched: Vec<(PoiKind, Option<Poi>)> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if !watched.iter().any(|(k, _)| *k == kind) {
                watched.push((kind, None));
            }
        }
        Self { watched }
    }

    /// Track every collection.
    pub fn all() -> Self {
        Self::new(&PoiKind::ALL)
    }

    /// Forget the active entries, e.g. after new media was assigned.
    pub fn reset(&mut self) {
        for (_, current) in self.watched.iter_mut() {
            *current = None;
        }
    }

    pub fn current(&self, kind: PoiKind) -> Option<&Poi> {
        self.watched
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, current)| current.as_ref())
    }

    /// Feed a real-domain time report; returns the collections whose active
    /// entry changed.
    pub fn update(&mut self, engine: &TimeDomainEngine, real_time: f64) -> Vec<HighlightChange> {
        let time = engine.time(real_time);
        let mut changes = Vec::new();

        for (kind, current) in self.watched.iter_mut() {
            let found = engine.find_point_of_interest(*kind, time);
            if found != *current {
                *current = found.clone();
                changes.push(HighlightChange {
                    kind: *kind,
                    current: found,
                });
            }
        }

        changes
    }
}
