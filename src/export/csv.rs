//! CSV Export functionality
//!
//! Exports the expense breakdown and the obligation summary in a
//! spreadsheet-friendly layout.

use std::io::Write;

use crate::error::{AffordError, AffordResult};
use crate::models::Money;
use crate::services::Assessment;

fn amount_field(amount: Money) -> String {
    format!("{:.2}", amount.to_f64())
}

fn percent_field(pct: Option<f64>) -> String {
    pct.map(|p| format!("{:.1}", p)).unwrap_or_default()
}

/// Export the expense breakdown to CSV
///
/// Percentages are left empty when salary is zero.
pub fn export_breakdown_csv<W: Write>(assessment: &Assessment, writer: W) -> AffordResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let currency = assessment.inputs.currency.code();
    let totals = &assessment.totals;

    csv_writer
        .write_record(["Category", "Amount", "Currency", "Percent of Salary"])
        .map_err(|e| AffordError::Export(e.to_string()))?;

    for item in &assessment.breakdown {
        csv_writer
            .write_record([
                item.name.to_string(),
                amount_field(item.amount),
                currency.to_string(),
                percent_field(item.percent),
            ])
            .map_err(|e| AffordError::Export(e.to_string()))?;
    }

    let summary = [
        ("Total Living Expenses", totals.total_living_expenses, totals.living_percent),
        ("Total Obligations", totals.total_obligations, totals.total_percent),
        ("Remaining", totals.remaining, totals.remaining_percent),
    ];
    for (label, amount, pct) in summary {
        csv_writer
            .write_record([
                label.to_string(),
                amount_field(amount),
                currency.to_string(),
                percent_field(pct),
            ])
            .map_err(|e| AffordError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AffordError::Export(e.to_string()))?;

    Ok(())
}
