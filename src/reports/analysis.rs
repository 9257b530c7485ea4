//! Analysis Report
//!
//! Narrative view: where the salary goes, what to do about it, and how the
//! month looks over a full year.

use crate::display::{colorize, format_amount, format_bar, format_percent_opt, format_title};
use crate::models::Currency;
use crate::services::{AnnualProjection, Assessment, BreakdownItem, Recommendation};

const BAR_WIDTH: usize = 20;

/// Analysis Report
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub currency: Currency,
    pub breakdown: Vec<BreakdownItem>,
    pub recommendations: Vec<Recommendation>,
    pub annual: AnnualProjection,
}

impl AnalysisReport {
    /// Build the analysis view from an assessment
    pub fn generate(assessment: &Assessment) -> Self {
        Self {
            currency: assessment.inputs.currency,
            breakdown: assessment.breakdown.clone(),
            recommendations: assessment.recommendations.clone(),
            annual: assessment.annual,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, color: bool) -> String {
        let mut output = String::new();

        output.push_str(&format_title(&format!("Expense Analysis ({})", self.currency)));

        output.push_str("\nExpense Breakdown\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for item in &self.breakdown {
            // Bars are capped at a full salary
            let fill = item.percent.unwrap_or(0.0).min(100.0);
            output.push_str(&format!(
                "  {:<18} {:>14} {:>8}  {}\n",
                item.name,
                format_amount(item.amount, self.currency),
                format_percent_opt(item.percent),
                format_bar(fill, 100.0, BAR_WIDTH)
            ));
        }

        output.push_str("\nRecommendations\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if self.recommendations.is_empty() {
            output.push_str("  Nothing stands out this month.\n");
        }
        for rec in &self.recommendations {
            output.push_str(&format!(
                "  {}: {}\n",
                rec.severity(),
                rec.message(self.currency)
            ));
        }

        output.push_str("\nAnnual Projections\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        let rows = [
            ("Annual Salary", self.annual.salary),
            ("Annual Mortgage", self.annual.mortgage),
            ("Annual Living", self.annual.living_expenses),
        ];
        for (label, amount) in rows {
            output.push_str(&format!(
                "  {:<18} {:>16}\n",
                label,
                format_amount(amount, self.currency)
            ));
        }
        let savings = format!("{:>16}", format_amount(self.annual.savings, self.currency));
        output.push_str(&format!(
            "  {:<18} {}\n",
            "Annual Savings",
            colorize(savings, self.annual.savings, color)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AffordabilityInputs, Money};
    use crate::services::{AffordabilityService, Severity};

    fn report_for(inputs: &AffordabilityInputs) -> AnalysisReport {
        AnalysisReport::generate(&AffordabilityService::new(inputs).assess())
    }

    #[test]
    fn test_generate() {
        let report = report_for(&AffordabilityInputs::baseline());

        assert_eq!(report.breakdown.len(), 7);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.recommendations[1].severity(), Severity::Urgent);
    }

    #[test]
    fn test_terminal_format() {
        let output = report_for(&AffordabilityInputs::baseline()).format_terminal(false);

        assert!(output.contains("Expense Analysis (SAR)"));
        assert!(output.contains("Mortgage Payment"));
        assert!(output.contains("50.5%"));
        assert!(output.contains("Food & Groceries"));
        assert!(output.contains("Critical: Your mortgage is 50.5% of your salary."));
        assert!(output.contains("Urgent: You have a monthly deficit of 637 SAR."));
        assert!(output.contains("Opportunity: Delivery apps cost 1,000 SAR/month."));
        assert!(output.contains("285,360 SAR"));
        assert!(output.contains("-7,640 SAR"));
    }

    #[test]
    fn test_bar_is_capped() {
        let inputs = AffordabilityInputs {
            salary: Money::from_units(1000),
            ..AffordabilityInputs::baseline()
        };
        let output = report_for(&inputs).format_terminal(false);

        // Mortgage is 1200% of salary; the bar stops at full width
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
        assert!(!output.contains(&"█".repeat(BAR_WIDTH + 1)));
    }

    #[test]
    fn test_no_recommendations() {
        let inputs: AffordabilityInputs =
            serde_json::from_str(r#"{"salary": 10000, "mortgage_payment": 3600}"#).unwrap();
        let output = report_for(&inputs).format_terminal(false);

        assert!(output.contains("Nothing stands out this month."));
    }
}
