//! Terminal rendering for the player.
//!
//! This module contains the text output used by `cutline play`:
//! - `progress`: Progress line with playhead, buffered span and markers
//! - highlight lines announcing the active point of interest

pub mod progress;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::TimeFormat;
use crate::descriptor::PointOfInterest;
use crate::player::tracker::HighlightChange;

pub use progress::{
    build_progress_bar_chars, format_duration, format_time, marker_percents, render_progress_line,
};

/// Truncate `text` to at most `max_width` terminal columns, appending `…`
/// when something was cut off.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}

/// One line describing a highlight change, e.g. `chapters → Intro @ 00:00`.
pub fn render_highlight_line(change: &HighlightChange, width: usize, format: TimeFormat) -> String {
    let line = match &change.current {
        Some(poi) => format!(
            "{} → {} @ {}",
            change.kind,
            poi.label().unwrap_or("(unnamed)"),
            format_time(poi.marker(), format)
        ),
        None => format!("{} → (none)", change.kind),
    };
    truncate_to_width(&line, width)
}
