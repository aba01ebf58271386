use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::demos::dice::{DICE_COUNT_RANGE, FACE_RANGE};
use crate::demos::input::parse_in_range;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/minidemos/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Log file used when `[logging].file` is not set.
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("minidemos.log")
    }

    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minidemos")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Tick rate and notice lifetime are non-zero
    /// - Initial dice count is within 1..=5
    /// - Initial maximum face value is a number within 1..=6
    /// - Log level names a tracing level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.toast_ticks == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.toast_ticks must be greater than zero".to_string(),
            });
        }

        if !DICE_COUNT_RANGE.contains(&i32::from(self.dice.initial_count)) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "dice.initial_count must be between 1 and 5, got {}",
                    self.dice.initial_count
                ),
            });
        }

        if let Err(err) = parse_in_range(&self.dice.initial_max, FACE_RANGE) {
            return Err(ConfigError::ValidationError {
                message: format!("dice.initial_max: {err}"),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}
