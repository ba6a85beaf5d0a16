//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can generate man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::TimeFormat;
use crate::descriptor::PoiKind;

/// Long version string: crate version plus build metadata from build.rs.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("CUTLINE_BUILD_DATE"),
    ")"
);

/// Cutline - inspect virtually trimmed media and its points of interest
#[derive(Debug, Parser)]
#[command(name = "cutline", version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that loads a media descriptor.
#[derive(Debug, Clone, Args)]
pub struct MediaArgs {
    /// Media descriptor (JSON)
    pub file: PathBuf,

    /// Real duration of the asset in milliseconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Ignore the descriptor's cut
    #[arg(long)]
    pub no_cuts: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the cut and the durations of both time domains
    Inspect {
        #[command(flatten)]
        media: MediaArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the points of interest visible in the cut
    Poi {
        #[command(flatten)]
        media: MediaArgs,

        /// Collection to list
        #[arg(value_enum)]
        kind: PoiKind,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find the point of interest active at a display time
    Find {
        #[command(flatten)]
        media: MediaArgs,

        /// Collection to search
        #[arg(value_enum)]
        kind: PoiKind,

        /// Display time in milliseconds (cut time while the cut is active)
        time: f64,
    },

    /// Convert a time or percentage between the real and cut domains
    #[command(group(ArgGroup::new("input").required(true).args(["real", "cut", "percent"])))]
    Convert {
        #[command(flatten)]
        media: MediaArgs,

        /// Real-domain time in milliseconds
        #[arg(long)]
        real: Option<f64>,

        /// Cut-domain time in milliseconds
        #[arg(long)]
        cut: Option<f64>,

        /// Seek-bar position in percent of the active duration
        #[arg(long)]
        percent: Option<f64>,
    },

    /// Simulate playback of the trimmed media and print progress
    Play {
        #[command(flatten)]
        media: MediaArgs,

        /// Collection to highlight (defaults to the configured one)
        #[arg(short, long, value_enum)]
        kind: Option<PoiKind>,

        /// Clock step between frames in milliseconds
        #[arg(long)]
        step: Option<u64>,

        /// Time display format
        #[arg(long, value_enum)]
        time_format: Option<TimeFormat>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without prompting
        #[arg(short, long)]
        yes: bool,
    },
}
