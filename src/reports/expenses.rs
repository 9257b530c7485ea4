//! Detailed Expenses Report
//!
//! Itemized view of every living expense, grouped the way they are entered.

use crate::display::{format_amount, format_line_items, format_title};
use crate::models::{Currency, Money};
use crate::services::Assessment;

/// A titled group of line items with its total
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseGroup {
    pub title: &'static str,
    pub items: Vec<(&'static str, Money)>,
    pub total_label: &'static str,
    pub total: Money,
}

impl ExpenseGroup {
    fn new(
        title: &'static str,
        items: Vec<(&'static str, Money)>,
        total_label: &'static str,
    ) -> Self {
        let total = items.iter().map(|(_, amount)| *amount).sum();
        Self {
            title,
            items,
            total_label,
            total,
        }
    }
}

/// Detailed Expenses Report
#[derive(Debug, Clone)]
pub struct ExpensesReport {
    pub currency: Currency,
    pub groups: Vec<ExpenseGroup>,
    pub total_living_expenses: Money,
}

impl ExpensesReport {
    /// Build the itemized view from an assessment
    pub fn generate(assessment: &Assessment) -> Self {
        let inputs = &assessment.inputs;

        let groups = vec![
            ExpenseGroup::new("Utilities", inputs.utilities.items().to_vec(), "Total Utilities"),
            ExpenseGroup::new("Car Expenses", inputs.car.items().to_vec(), "Total Car"),
            ExpenseGroup::new(
                "Food & Groceries",
                vec![
                    ("Groceries", inputs.groceries),
                    ("Delivery Apps", inputs.delivery_apps),
                ],
                "Total Food",
            ),
            ExpenseGroup::new(
                "Other Expenses",
                vec![
                    ("Family Expenses", inputs.family_expenses),
                    ("School Fees", inputs.school),
                    ("Subscriptions", inputs.subscriptions),
                ],
                "Total Other",
            ),
        ];

        Self {
            currency: inputs.currency,
            groups,
            total_living_expenses: assessment.totals.total_living_expenses,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format_title(&format!("Detailed Expenses ({})", self.currency)));

        for group in &self.groups {
            output.push('\n');
            output.push_str(group.title);
            output.push('\n');
            output.push_str(&format_line_items(
                &group.items,
                group.total_label,
                group.total,
                self.currency,
            ));
            output.push('\n');
        }

        output.push_str(&format!(
            "\nTotal Living Expenses: {}\n",
            format_amount(self.total_living_expenses, self.currency)
        ));

        output
    }
}
