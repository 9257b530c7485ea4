//! Path management for afford
//!
//! Resolves where settings and the saved default scenario live.
//!
//! ## Path Resolution Order
//!
//! 1. `AFFORD_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME/afford-cli`,
//!    `~/Library/Application Support/afford-cli`, `%APPDATA%\afford-cli`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AffordError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "AFFORD_CLI_DATA_DIR";

/// Manages all paths used by afford
#[derive(Debug, Clone)]
pub struct AffordPaths {
    /// Base directory for all afford files
    base_dir: PathBuf,
}

impl AffordPaths {
    /// Create a new AffordPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, AffordError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AffordPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the saved default scenario
    pub fn scenario_file(&self) -> PathBuf {
        self.base_dir.join("scenario.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AffordError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AffordError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, AffordError> {
    ProjectDirs::from("", "", "afford-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AffordError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AffordPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.scenario_file(), temp_dir.path().join("scenario.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = AffordPaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AffordPaths::with_base_dir(temp_dir.path().join("nested").join("afford"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
