//! Console configuration: TOML file merged with command-line overrides.

use crate::cli::SharedOptions;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the final result is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Only the closing message.
    #[default]
    Text,
    /// Closing message followed by a JSON match summary.
    Json,
}

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Preset name for the first player (X).
    #[serde(default)]
    player_x: Option<String>,

    /// Preset name for the second player (O).
    #[serde(default)]
    player_o: Option<String>,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How to report the result.
    #[serde(default)]
    summary: SummaryFormat,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            log_filter: default_log_filter(),
            summary: SummaryFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(summary = ?config.summary, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration: file (if any), then CLI flags.
    #[instrument(skip(options))]
    pub fn resolve(options: &SharedOptions) -> Result<Self, ConfigError> {
        let base = match &options.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(options))
    }

    /// Applies command-line values on top of this configuration.
    pub fn with_overrides(mut self, options: &SharedOptions) -> Self {
        if let Some(name) = &options.player_x {
            self.player_x = Some(name.clone());
        }
        if let Some(name) = &options.player_o {
            self.player_o = Some(name.clone());
        }
        if let Some(filter) = &options.log {
            self.log_filter = filter.clone();
        }
        if let Some(summary) = options.summary {
            self.summary = summary;
        }
        self
    }

    /// Preset name for seat 0 (X) or 1 (O).
    pub fn preset_name(&self, seat: usize) -> Option<&str> {
        match seat {
            0 => self.player_x.as_deref(),
            1 => self.player_o.as_deref(),
            _ => None,
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
