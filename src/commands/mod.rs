//! Command handlers for the cutline binary.

pub mod completions;
pub mod config;
pub mod convert;
pub mod inspect;
pub mod play;
pub mod poi;

use anyhow::{Context, Result};
use tracing::warn;

use cutline::cli::MediaArgs;
use cutline::timeline::{describe_discard, EngineEvent, TimeDomainEngine};
use cutline::{Config, MediaDescriptor};

/// ANSI escape codes for CLI output.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Load the descriptor named on the command line into a fresh engine.
///
/// `--duration` is applied when `apply_duration` is set; `--no-cuts` and
/// `engine.cuts_enabled = false` both switch the cut off after loading.
pub fn load_engine(
    args: &MediaArgs,
    config: &Config,
    apply_duration: bool,
) -> Result<TimeDomainEngine> {
    let media = MediaDescriptor::load(&args.file)
        .with_context(|| format!("Failed to load media descriptor {}", args.file.display()))?;

    let mut engine = TimeDomainEngine::new();
    engine.subscribe(|event| {
        if let EngineEvent::CutDiscarded { reason } = event {
            warn!("cut discarded: {}", describe_discard(*reason));
        }
    });
    engine.set_media(Some(media));

    if apply_duration {
        if let Some(duration) = args.duration {
            engine.set_real_duration(duration);
        }
    }
    if args.no_cuts || !config.engine.cuts_enabled {
        engine.set_cuts_status(false);
    }

    Ok(engine)
}

/// Format a millisecond value without a trailing `.0`.
pub fn ms(value: f64) -> String {
    format!("{}ms", value)
}
