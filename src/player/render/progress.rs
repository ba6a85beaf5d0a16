//! Progress line rendering.
//!
//! Displays the playhead, the buffered span and point-of-interest markers
//! on a single line, all positioned in the active (cut or real) domain.

use crate::config::TimeFormat;
use crate::descriptor::{PoiKind, PointOfInterest};
use crate::player::session::PlaybackSnapshot;
use crate::timeline::TimeDomainEngine;

const PLAYHEAD: char = '⏺';
const MARKER: char = '◆';
const BUFFERED: char = '═';
const EMPTY: char = '─';

/// Format a duration in milliseconds as MM:SS.
///
/// # Arguments
/// * `millis` - Duration in milliseconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(millis: f64) -> String {
    let total_secs = (millis / 1000.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format a time according to the configured display format.
pub fn format_time(millis: f64, format: TimeFormat) -> String {
    match format {
        TimeFormat::Clock => format_duration(millis),
        TimeFormat::Millis => format!("{}ms", millis.max(0.0).round() as u64),
    }
}

/// Marker positions of a collection, in percent of the active duration.
pub fn marker_percents(engine: &TimeDomainEngine, kind: PoiKind) -> Vec<f64> {
    let duration = engine.duration();
    if duration <= 0.0 {
        return Vec::new();
    }
    engine
        .media_points_of_interest(kind)
        .iter()
        .map(|poi| poi.marker() / duration * 100.0)
        .collect()
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `percent` - Playhead position, percent of the active duration
/// * `buffered_percent` - Buffered span ahead of the playhead, percent of
///   the active duration
/// * `markers` - Marker positions, percent of the active duration
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where filled_count is the number of
/// positions before the playhead.
pub fn build_progress_bar_chars(
    bar_width: usize,
    percent: f64,
    buffered_percent: f64,
    markers: &[f64],
) -> (Vec<char>, usize) {
    let progress = (percent / 100.0).clamp(0.0, 1.0);
    let buffered = ((percent + buffered_percent) / 100.0).clamp(progress, 1.0);

    let filled = (bar_width as f64 * progress) as usize;
    let buffered_end = (bar_width as f64 * buffered) as usize;

    let mut bar: Vec<char> = vec![EMPTY; bar_width];
    for slot in bar.iter_mut().take(buffered_end).skip(filled + 1) {
        *slot = BUFFERED;
    }

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    for marker in markers {
        let marker_pos = ((marker / 100.0).clamp(0.0, 1.0) * bar_width as f64) as usize;
        if marker_pos < bar_width && bar[marker_pos] != PLAYHEAD {
            bar[marker_pos] = MARKER;
        }
    }

    (bar, filled)
}

/// Render the progress line for a snapshot.
///
/// # Arguments
/// * `width` - Total line width
/// * `snapshot` - Current playback snapshot
/// * `markers` - Marker positions, percent of the active duration
/// * `format` - Time display format
/// * `color` - Whether to emit ANSI color codes
pub fn render_progress_line(
    width: usize,
    snapshot: &PlaybackSnapshot,
    markers: &[f64],
    format: TimeFormat,
    color: bool,
) -> String {
    let time_display = format!(
        " {}/{}",
        format_time(snapshot.time, format),
        format_time(snapshot.duration, format)
    );
    let bar_width = width.saturating_sub(time_display.chars().count() + 1);
    let (bar, filled) =
        build_progress_bar_chars(bar_width, snapshot.percent, snapshot.buffered_percent, markers);

    // ANSI color codes
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(width * 4);
    output.push(' ');
    for (i, &c) in bar.iter().enumerate() {
        let (code, ch) = if i < filled {
            if c == MARKER {
                (YELLOW, c)
            } else {
                (GREEN, '━')
            }
        } else if c == PLAYHEAD {
            (WHITE, c)
        } else if c == MARKER {
            (YELLOW, c)
        } else if c == BUFFERED {
            (GREY, c)
        } else {
            (DARK_GREY, c)
        };
        if color {
            output.push_str(code);
        }
        output.push(ch);
    }

    if color {
        output.push_str(GREY);
    }
    output.push_str(&time_display);
    if color {
        output.push_str(RESET);
    }
    output
}
