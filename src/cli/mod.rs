//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculator and reports.

pub mod export;
pub mod inputs;
pub mod report;

pub use export::{handle_export_command, handle_template_command};
pub use inputs::InputArgs;
pub use report::{handle_view_command, render_view, View};
