//! Configuration
//!
//! User settings live in a TOML file at `$CUTLINE_CONFIG`, or
//! `<config dir>/cutline/config.toml` when the variable is unset. A missing
//! file means defaults; missing fields inside a file fall back to defaults
//! too, and `migrate_config` can write them back in.

mod error;
mod migrate;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::descriptor::PoiKind;

pub use error::ConfigError;
pub use migrate::{migrate_config, MigrateResult};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CUTLINE_CONFIG";

/// Width used when the terminal size cannot be determined.
const FALLBACK_WIDTH: usize = 80;

/// How times are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// MM:SS
    #[default]
    Clock,
    /// Whole milliseconds
    Millis,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Progress line width; 0 follows the terminal width
    pub bar_width: usize,
    /// Emit ANSI colors (also disabled by `NO_COLOR` or a non-TTY stdout)
    pub color: bool,
    pub time_format: TimeFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 0,
            color: true,
            time_format: TimeFormat::Clock,
        }
    }
}

/// Simulated playback settings for `cutline play`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Clock step between frames, in milliseconds
    pub tick_ms: u64,
    /// Collection highlighted when none is given on the command line
    pub default_collection: PoiKind,
    /// Delay before the simulated backend reports the duration
    pub duration_delay_ms: u64,
    /// Buffered range the simulated backend keeps ahead of the playhead
    pub buffer_ahead_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            default_collection: PoiKind::Chapters,
            duration_delay_ms: 0,
            buffer_ahead_ms: 5000,
        }
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Apply the descriptor's cut after loading media
    pub cuts_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { cuts_enabled: true }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub playback: PlaybackConfig,
    pub engine: EngineConfig,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("cutline").join("config.toml"))
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load the config from `path`; a missing file yields defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path()?)
    }

    /// Save the config to `path`, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Progress line width to use right now.
    pub fn effective_width(&self) -> usize {
        if self.display.bar_width > 0 {
            return self.display.bar_width;
        }
        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Whether ANSI colors should be written to stdout.
    pub fn use_color(&self) -> bool {
        self.display.color
            && std::env::var_os("NO_COLOR").is_none()
            && atty::is(atty::Stream::Stdout)
    }
}
