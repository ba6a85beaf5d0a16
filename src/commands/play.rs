//! `cutline play` - simulated playback through the engine.

use anyhow::{bail, Result};

use cutline::cli::MediaArgs;
use cutline::config::TimeFormat;
use cutline::player::render::{marker_percents, render_highlight_line, render_progress_line};
use cutline::player::{HighlightTracker, PlaybackBackend, PlayerSession, SimulatedBackend};
use cutline::{Config, PoiKind};

use super::load_engine;

const MAX_FRAMES: f64 = 1_000_000.0;

#[cfg(not(tarpaulin_include))]
pub fn handle(
    args: &MediaArgs,
    kind: Option<PoiKind>,
    step: Option<u64>,
    time_format: Option<TimeFormat>,
) -> Result<()> {
    let config = Config::load()?;
    let Some(duration) = args.duration else {
        bail!("play needs the real duration of the asset (--duration)");
    };
    if !duration.is_finite() || duration <= 0.0 {
        bail!("--duration must be a positive number of milliseconds");
    }
    let step = step.unwrap_or(config.playback.tick_ms);
    if step == 0 {
        bail!("--step must be greater than zero");
    }
    if duration / step as f64 > MAX_FRAMES {
        bail!(
            "--duration {} at --step {} needs more than {} frames",
            duration,
            step,
            MAX_FRAMES
        );
    }
    let kind = kind.unwrap_or(config.playback.default_collection);
    let format = time_format.unwrap_or(config.display.time_format);
    let width = config.effective_width();
    let color = config.use_color();

    // The backend reports the duration, the way a real player would
    let engine = load_engine(args, &config, false)?;
    let backend = SimulatedBackend::new(duration)
        .with_duration_delay(config.playback.duration_delay_ms as f64)
        .with_buffer_ahead(config.playback.buffer_ahead_ms as f64);
    let mut session = PlayerSession::new(engine, backend, HighlightTracker::new(&[kind]));

    session.start();
    loop {
        let (snapshot, changes) = session.tick();
        for change in &changes {
            println!("{}", render_highlight_line(change, width, format));
        }
        let markers = marker_percents(session.engine(), kind);
        println!(
            "{}",
            render_progress_line(width, &snapshot, &markers, format, color)
        );

        if snapshot.finished || session.backend().at_end() {
            break;
        }
        session.backend_mut().advance(step as f64);
    }

    tracing::debug!(position = session.backend().position(), "playback finished");
    Ok(())
}
