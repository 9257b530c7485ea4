//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, percentages and expense
//! tables for terminal display.

pub mod report;
pub mod table;

pub use report::{
    colorize, format_amount, format_bar, format_currency, format_percent, format_percent_opt,
    format_title, format_units,
};
pub use table::format_line_items;
