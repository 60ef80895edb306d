//! Front-end configuration loaded from TOML.

use crate::output::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::EngineOptions;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Skip the win check until a player has three tokens down.
    #[serde(default)]
    fast_path: bool,

    /// Output format for boards and results.
    #[serde(default)]
    format: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fast_path: false,
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("cannot read {}: {e}", path.as_ref().display())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("malformed TOML: {e}")))?;

        info!(?config, "Config loaded successfully");
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

    /// Applies command-line overrides. A set flag wins over the file.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, fast_path: bool, format: Option<OutputFormat>) -> Self {
        self.fast_path |= fast_path;
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Engine options derived from this config.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            fast_path: self.fast_path,
        }
    }
}

/// A config file that could not be read or did not parse.
///
/// Records where in this crate the failure was raised, so a bad file and a
/// bad default are told apart in logs.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid configuration: {message} (raised at {file}:{line})")]
pub struct ConfigError {
    /// What went wrong, including the underlying I/O or TOML error.
    pub message: String,
    /// Line of the `ConfigError::new` call.
    pub line: u32,
    /// File of the `ConfigError::new` call.
    pub file: &'static str,
}

impl ConfigError {
    /// Wraps a failure message, capturing the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
