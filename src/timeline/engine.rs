//! Time-domain engine façade.
//!
//! Owns the media descriptor, the derived `CutState` and the subscriber
//! list. Hosts feed it through three inputs (`set_media`,
//! `set_real_duration`, `set_cuts_status`) and read everything else through
//! accessors.

use std::collections::BTreeMap;

use tracing::debug;

use super::cut::{CutState, DiscardReason};
use super::events::{EngineEvent, Subscribers, SubscriptionId};
use super::poi::{self, MarkerKey};
use crate::descriptor::{
    Chapter, MediaDescriptor, Poi, PoiKind, PointOfInterest, Tag, Timecode, TimecodeImage,
};

/// Virtual trim plus points of interest for the current media.
#[derive(Debug, Default)]
pub struct TimeDomainEngine {
    media: Option<MediaDescriptor>,
    cut: CutState,
    subscribers: Subscribers,
}

impl TimeDomainEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with `media` already assigned.
    pub fn with_media(media: MediaDescriptor) -> Self {
        let mut engine = Self::new();
        engine.set_media(Some(media));
        engine
    }

    /// Assign new media, superseding everything derived from the previous
    /// one (including the real duration).
    ///
    /// The point-of-interest collections are sorted by marker here, once.
    pub fn set_media(&mut self, media: Option<MediaDescriptor>) {
        self.cut = CutState::new();
        let mut discarded = None;

        self.media = media.map(|mut media| {
            discarded = self.cut.apply_edges(&media.cut);
            poi::sort_by_marker(&mut media.timecodes);
            poi::sort_by_marker(&mut media.chapters);
            poi::sort_by_marker(&mut media.tags);
            media
        });

        debug!(
            has_media = self.media.is_some(),
            cuts_activated = self.cut.cuts_activated(),
            "media assigned"
        );

        if let Some(reason) = discarded {
            self.subscribers.emit(&EngineEvent::CutDiscarded { reason });
        }
        self.subscribers.emit(&EngineEvent::MediaChanged {
            has_media: self.media.is_some(),
            cuts_activated: self.cut.cuts_activated(),
        });
    }

    /// Record the real duration reported by the playback backend.
    pub fn set_real_duration(&mut self, duration: f64) {
        let previous = self.cut.real_duration();
        let discarded = self.cut.set_real_duration(duration);

        if let Some(reason) = discarded {
            self.subscribers.emit(&EngineEvent::CutDiscarded { reason });
        }
        if let Some(real_duration) = self.cut.real_duration() {
            if previous != Some(real_duration) {
                debug!(real_duration, "real duration changed");
                self.subscribers.emit(&EngineEvent::DurationChanged { real_duration });
            }
        }
    }

    /// Enable or disable the cut without forgetting its edges.
    pub fn set_cuts_status(&mut self, activated: bool) {
        let previous = self.cut.cuts_activated();
        self.cut.set_cuts_status(activated);
        let activated = self.cut.cuts_activated();
        if previous == activated {
            return;
        }
        debug!(activated, "cuts status changed");
        self.subscribers.emit(&EngineEvent::CutsStatusChanged { activated });
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&EngineEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn media(&self) -> Option<&MediaDescriptor> {
        self.media.as_ref()
    }

    pub fn cut_state(&self) -> &CutState {
        &self.cut
    }

    // === Cut model ===

    pub fn cuts_activated(&self) -> bool {
        self.cut.cuts_activated()
    }

    pub fn real_duration(&self) -> Option<f64> {
        self.cut.real_duration()
    }

    pub fn cut_start(&self) -> f64 {
        self.cut.cut_start()
    }

    pub fn cut_end(&self) -> f64 {
        self.cut.cut_end()
    }

    // === Domain conversion ===

    pub fn real_time(&self, cut_time: f64) -> f64 {
        self.cut.real_time(cut_time)
    }

    pub fn cut_time(&self, real_time: f64) -> f64 {
        self.cut.cut_time(real_time)
    }

    pub fn cut_duration(&self) -> f64 {
        self.cut.cut_duration()
    }

    pub fn duration(&self) -> f64 {
        self.cut.duration()
    }

    pub fn cut_percent(&self, real_percent: f64) -> f64 {
        self.cut.cut_percent(real_percent)
    }

    pub fn cut_duration_percent(&self, real_span_percent: f64) -> f64 {
        self.cut.cut_duration_percent(real_span_percent)
    }

    pub fn percent(&self, real_time: f64) -> f64 {
        self.cut.percent(real_time)
    }

    pub fn time_from_percent(&self, percent: f64) -> f64 {
        self.cut.time_from_percent(percent)
    }

    pub fn time(&self, real_time: f64) -> f64 {
        self.cut.time(real_time)
    }

    // === Points of interest ===

    /// Filtered slide markers, in cut time when the cut is active.
    pub fn timecodes(&self) -> Vec<Timecode> {
        self.filtered(|media| &media.timecodes)
    }

    /// Filtered chapters, in cut time when the cut is active.
    pub fn chapters(&self) -> Vec<Chapter> {
        self.filtered(|media| &media.chapters)
    }

    /// Filtered tags, in cut time when the cut is active.
    pub fn tags(&self) -> Vec<Tag> {
        self.filtered(|media| &media.tags)
    }

    /// Filtered entries of the named collection. Never fails: no media or a
    /// missing collection yields an empty vector.
    pub fn media_points_of_interest(&self, kind: PoiKind) -> Vec<Poi> {
        match kind {
            PoiKind::Timecodes => self.timecodes().into_iter().map(Poi::Timecode).collect(),
            PoiKind::Chapters => self.chapters().into_iter().map(Poi::Chapter).collect(),
            PoiKind::Tags => self.tags().into_iter().map(Poi::Tag).collect(),
        }
    }

    /// Slide images keyed by cut-domain marker, rebuilt on every call.
    pub fn media_timecodes_by_time(&self) -> BTreeMap<MarkerKey, TimecodeImage> {
        poi::images_by_time(&self.timecodes())
    }

    /// Entry active at cut-domain `time`, if any.
    pub fn find_point_of_interest(&self, kind: PoiKind, time: f64) -> Option<Poi> {
        let points = self.media_points_of_interest(kind);
        poi::find_at(&points, time).cloned()
    }

    fn filtered<P, F>(&self, collection: F) -> Vec<P>
    where
        P: PointOfInterest,
        F: FnOnce(&MediaDescriptor) -> &Vec<P>,
    {
        match &self.media {
            Some(media) => poi::filter_to_window(collection(media), self.cut.window()),
            None => Vec::new(),
        }
    }
}

/// Reason a cut was dropped, as a short phrase for logs and CLI output.
pub fn describe_discard(reason: DiscardReason) -> &'static str {
    match reason {
        DiscardReason::Degenerate => "begin edge is not before end edge",
        DiscardReason::BeyondDuration => "cut exceeds the real duration",
    }
}
