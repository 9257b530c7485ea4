//! User settings for afford
//!
//! Manages user preferences: the default currency label, terminal colors
//! and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::AffordPaths;
use crate::error::AffordError;
use crate::models::Currency;

/// User settings for afford
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label used when no scenario file sets one
    #[serde(default)]
    pub default_currency: Currency,

    /// Whether to color amounts when writing to a terminal
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "afford=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_color_output() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            color_output: default_color_output(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AffordPaths) -> Result<Self, AffordError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AffordError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AffordError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AffordPaths) -> Result<(), AffordError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AffordError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AffordError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
