//! Dashboard Report
//!
//! Summary view: risk tier, the obligations overview and what the salary can
//! comfortably carry.

use crate::display::{colorize, format_amount, format_percent_opt, format_title, format_units};
use crate::models::{Currency, Money, RiskLevel};
use crate::services::Assessment;

/// One row of the financial overview
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewRow {
    pub label: &'static str,
    pub amount: Money,
    pub percent_of_salary: Option<f64>,
}

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub currency: Currency,
    pub risk: RiskLevel,
    pub mortgage_percent: Option<f64>,
    pub overview: Vec<OverviewRow>,
    pub remaining: Money,
    pub max_affordable_35: f64,
    pub max_affordable_40: f64,
}

impl DashboardReport {
    /// Build the dashboard from an assessment
    pub fn generate(assessment: &Assessment) -> Self {
        let inputs = &assessment.inputs;
        let totals = &assessment.totals;

        let overview = vec![
            OverviewRow {
                label: "Mortgage Payment",
                amount: inputs.mortgage_payment,
                percent_of_salary: totals.mortgage_percent,
            },
            OverviewRow {
                label: "Living Expenses",
                amount: totals.total_living_expenses,
                percent_of_salary: totals.living_percent,
            },
            OverviewRow {
                label: "Total Obligations",
                amount: totals.total_obligations,
                percent_of_salary: totals.total_percent,
            },
            OverviewRow {
                label: "Remaining",
                amount: totals.remaining,
                percent_of_salary: totals.remaining_percent,
            },
        ];

        Self {
            currency: inputs.currency,
            risk: totals.risk,
            mortgage_percent: totals.mortgage_percent,
            overview,
            remaining: totals.remaining,
            max_affordable_35: totals.max_affordable_35,
            max_affordable_40: totals.max_affordable_40,
        }
    }

    /// Check if obligations exceed salary
    pub fn has_deficit(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, color: bool) -> String {
        let mut output = String::new();

        output.push_str(&format_title(&format!(
            "Mortgage Affordability Dashboard ({})",
            self.currency
        )));
        output.push_str(&format!("Risk Level:            {}\n", self.risk));
        output.push_str(&format!(
            "Debt-to-Income Ratio:  {}\n\n",
            format_percent_opt(self.mortgage_percent)
        ));

        output.push_str("Financial Overview\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.overview {
            let amount = format!("{:>16}", format_amount(row.amount, self.currency));
            let amount = if row.label == "Remaining" {
                colorize(amount, row.amount, color)
            } else {
                amount
            };
            output.push_str(&format!(
                "  {:<20} {} {:>9} of salary\n",
                row.label,
                amount,
                format_percent_opt(row.percent_of_salary)
            ));
        }

        output.push_str("\nWhat You Can Afford\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "  {:<26} {:>14} per month  (safe and comfortable)\n",
            "Conservative (35% Rule)",
            format!("{} {}", format_units(self.max_affordable_35), self.currency)
        ));
        output.push_str(&format!(
            "  {:<26} {:>14} per month  (manageable but tight)\n",
            "Moderate (40% Rule)",
            format!("{} {}", format_units(self.max_affordable_40), self.currency)
        ));

        if self.has_deficit() {
            let deficit = self.remaining.abs();
            output.push_str("\nWarning: Monthly Deficit\n");
            output.push_str(&format!(
                "  You're overspending by {}/month ({}/year)\n",
                format_amount(deficit, self.currency),
                format_amount(deficit.times(12), self.currency)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AffordabilityInputs;
    use crate::services::AffordabilityService;

    fn baseline_report() -> DashboardReport {
        let inputs = AffordabilityInputs::baseline();
        DashboardReport::generate(&AffordabilityService::new(&inputs).assess())
    }

    #[test]
    fn test_generate() {
        let report = baseline_report();

        assert_eq!(report.risk, RiskLevel::VeryHigh);
        assert_eq!(report.overview.len(), 4);
        assert_eq!(report.overview[3].amount, Money::from_cents(-63_667));
        assert!(report.has_deficit());
    }

    #[test]
    fn test_terminal_format() {
        let output = baseline_report().format_terminal(false);

        assert!(output.contains("Mortgage Affordability Dashboard (SAR)"));
        assert!(output.contains("Risk Level:            Very High"));
        assert!(output.contains("Debt-to-Income Ratio:  50.5%"));
        assert!(output.contains("24,417 SAR"));
        assert!(output.contains("-637 SAR"));
        assert!(output.contains("8,323 SAR"));
        assert!(output.contains("9,512 SAR"));
        assert!(output.contains("You're overspending by 637 SAR/month (7,640 SAR/year)"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_no_deficit_warning_when_solvent() {
        let inputs = AffordabilityInputs {
            salary: Money::from_units(50000),
            ..AffordabilityInputs::baseline()
        };
        let report = DashboardReport::generate(&AffordabilityService::new(&inputs).assess());
        let output = report.format_terminal(false);

        assert!(!output.contains("Monthly Deficit"));
        assert!(output.contains("Risk Level:            Safe"));
    }

    #[test]
    fn test_zero_salary_prints_na() {
        let inputs = AffordabilityInputs {
            salary: Money::zero(),
            ..AffordabilityInputs::baseline()
        };
        let output = DashboardReport::generate(&AffordabilityService::new(&inputs).assess())
            .format_terminal(false);

        assert!(output.contains("Debt-to-Income Ratio:  n/a"));
        assert!(output.contains("Very High"));
        assert!(!output.contains("NaN"));
        assert!(!output.contains("inf"));
    }
}
