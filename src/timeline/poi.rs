//! Point-of-interest filtering against the cut window.
//!
//! Collections are expected in ascending marker order (`sort_by_marker` is
//! applied once when media is assigned). Filtering always produces a new,
//! owned vector with markers rewritten into the cut domain.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use super::cut::CutWindow;
use crate::descriptor::{PointOfInterest, Timecode, TimecodeImage};

/// Stable ascending sort by marker.
///
/// Entries with a non-finite marker cannot be placed on a timeline and are
/// dropped.
pub fn sort_by_marker<P: PointOfInterest>(items: &mut Vec<P>) {
    let before = items.len();
    items.retain(|item| item.marker().is_finite());
    if items.len() != before {
        warn!(
            dropped = before - items.len(),
            "dropping points of interest with non-finite markers"
        );
    }
    items.sort_by(|a, b| a.marker().total_cmp(&b.marker()));
}

/// Entries visible through `window`, re-anchored to cut time.
///
/// With no window (cuts inactive) this is a plain copy. Otherwise entries
/// inside `[start, end]` are kept with `marker - start`, and the last entry
/// before the window is duplicated at marker 0 unless something already sits
/// exactly there, so trimmed playback never starts without context.
pub fn filter_to_window<P: PointOfInterest>(items: &[P], window: Option<CutWindow>) -> Vec<P> {
    let Some(window) = window else {
        return items.to_vec();
    };

    let mut preceding: Option<P> = None;
    let mut visible = Vec::new();

    for item in items {
        let marker = item.marker();
        if marker < window.start {
            let mut candidate = item.clone();
            candidate.set_marker(0.0);
            preceding = Some(candidate);
            continue;
        }
        if window.end.map_or(false, |end| marker > end) {
            break;
        }
        let mut entry = item.clone();
        entry.set_marker(marker - window.start);
        visible.push(entry);
    }

    if let Some(candidate) = preceding {
        let starts_at_zero = visible.first().map_or(false, |first| first.marker() == 0.0);
        if !starts_at_zero {
            visible.insert(0, candidate);
        }
    }

    visible
}

/// Entry whose `[marker, next marker)` range contains `time`.
///
/// `None` before the first marker: nothing is active yet, which is not the
/// same as the first entry being active. At or after the last marker the
/// last entry is returned.
pub fn find_at<P: PointOfInterest>(items: &[P], time: f64) -> Option<&P> {
    let first = items.first()?;
    if time.is_nan() || time < first.marker() {
        return None;
    }
    items
        .windows(2)
        .find(|pair| time >= pair[0].marker() && time < pair[1].marker())
        .map(|pair| &pair[0])
        .or_else(|| items.last())
}

/// Map key for a marker, ordered with `f64::total_cmp`. `-0.0` is stored as
/// `0.0` so both land on the same key.
#[derive(Debug, Clone, Copy)]
pub struct MarkerKey(f64);

impl MarkerKey {
    pub fn new(marker: f64) -> Self {
        Self(marker + 0.0)
    }

    pub fn millis(&self) -> f64 {
        self.0
    }
}

impl PartialEq for MarkerKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MarkerKey {}

impl PartialOrd for MarkerKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MarkerKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Project timecodes into marker -> slide image. A later entry at the same
/// marker replaces an earlier one.
pub fn images_by_time(timecodes: &[Timecode]) -> BTreeMap<MarkerKey, TimecodeImage> {
    timecodes
        .iter()
        .map(|timecode| (MarkerKey::new(timecode.marker()), timecode.image.clone()))
        .collect()
}
