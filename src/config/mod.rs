//! Configuration module for afford
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AffordPaths;
pub use settings::Settings;
