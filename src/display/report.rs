//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard, expenses and
//! analysis views.

use crate::models::money::group_thousands;
use crate::models::{Currency, Money};

/// Format an amount rounded to whole units with `,` grouping
///
/// Halves round away from zero and the sign is kept. A value that rounds to
/// zero prints as `0`, never `-0`.
///
/// # Examples
/// ```
/// use afford::display::format_currency;
/// use afford::models::Money;
/// assert_eq!(format_currency(Money::from_cents(-63_667)), "-637");
/// assert_eq!(format_currency(Money::from_units(1_234_567)), "1,234,567");
/// ```
pub fn format_currency(amount: Money) -> String {
    format_whole_units(amount.round_units())
}

/// Format an unrounded amount of currency units the way [`format_currency`] does
///
/// # Examples
/// ```
/// use afford::display::format_units;
/// assert_eq!(format_units(8323.0035), "8,323");
/// assert_eq!(format_units(-0.4), "0");
/// ```
pub fn format_units(value: f64) -> String {
    format_whole_units(value.round() as i64)
}

fn format_whole_units(units: i64) -> String {
    let grouped = group_thousands(&units.unsigned_abs().to_string());
    if units < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount followed by its currency label
pub fn format_amount(amount: Money, currency: Currency) -> String {
    format!("{} {}", format_currency(amount), currency)
}

/// Wrap already-formatted (and padded) text in the color for `amount`'s sign
pub fn colorize(text: String, amount: Money, color: bool) -> String {
    if !color {
        text
    } else if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else {
        format!("\x1b[32m{}\x1b[0m", text) // Green otherwise
    }
}

/// Format a percentage with one decimal place
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a salary-relative percentage, `n/a` when it is undefined
pub fn format_percent_opt(pct: Option<f64>) -> String {
    pct.map(format_percent).unwrap_or_else(|| "n/a".to_string())
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section title underlined to its own width
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}
