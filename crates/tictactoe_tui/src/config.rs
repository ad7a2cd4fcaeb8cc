//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::GameOptions;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front-end.
///
/// ```toml
/// log_file = "tictactoe.log"
/// tick_rate_ms = 100
///
/// [game]
/// start_descending = false
/// allow_branching = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the interactive UI writes logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// How long to wait for a key before redrawing, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Options for every game started by the UI.
    #[serde(default)]
    game: GameOptions,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Input poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Game options with command-line switches layered on top.
    ///
    /// A flag can only turn an option on; the file decides otherwise.
    pub fn game_options(&self, descending: bool, allow_branching: bool) -> GameOptions {
        self.game
            .with_start_descending(descending || *self.game.start_descending())
            .with_allow_branching(allow_branching || *self.game.allow_branching())
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            tick_rate_ms: default_tick_rate_ms(),
            game: GameOptions::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
