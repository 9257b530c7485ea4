//! Itemized expense tables
//!
//! Renders a group of labelled amounts with a closing total row.

use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Currency, Money};

use super::report::format_amount;

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Monthly")]
    amount: String,
}

/// Format labelled amounts as a table ending in a total row
pub fn format_line_items(
    items: &[(&str, Money)],
    total_label: &str,
    total: Money,
    currency: Currency,
) -> String {
    let rows = items
        .iter()
        .map(|(item, amount)| LineItemRow {
            item: (*item).to_string(),
            amount: format_amount(*amount, currency),
        })
        .chain(std::iter::once(LineItemRow {
            item: total_label.to_string(),
            amount: format_amount(total, currency),
        }));

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
