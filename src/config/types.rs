use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::demos::DemoKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub dice: DiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tab shown at startup (default: dice).
    #[serde(default)]
    pub start_demo: DemoKind,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How many ticks a notice stays on screen (default: 8).
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u32,
}

/// Starting values for the dice screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Number of dice, 1..=5 (default: 1).
    #[serde(default = "default_initial_count")]
    pub initial_count: u8,
    /// Shared maximum face value, 1..=6 (default: "6").
    #[serde(default = "default_initial_max")]
    pub initial_max: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. `~/` is expanded.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_ticks() -> u32 {
    8
}

fn default_initial_count() -> u8 {
    1
}

fn default_initial_max() -> String {
    crate::demos::dice::DEFAULT_FACE_MAXIMUM.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_demo: DemoKind::default(),
            tick_rate_ms: default_tick_rate_ms(),
            toast_ticks: default_toast_ticks(),
        }
    }
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            initial_count: default_initial_count(),
            initial_max: default_initial_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
