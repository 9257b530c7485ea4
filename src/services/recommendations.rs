//! Advisory recommendations
//!
//! Each trigger is evaluated on its own against the current totals. Several
//! can fire at once; the order of the returned list is display order only.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::display::{format_currency, format_percent, format_units};
use crate::models::{AffordabilityInputs, Currency, Money};

use super::affordability::{share_of_salary_cmp, Totals, CONSERVATIVE_SHARE_PCT, MODERATE_SHARE_PCT};

/// Monthly delivery-app spend above which a saving opportunity is flagged
pub const DELIVERY_SPEND_LIMIT: Money = Money::from_units(800);

/// How strongly a recommendation should be worded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Urgent,
    Opportunity,
    Warning,
    Excellent,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "Critical",
            Severity::Urgent => "Urgent",
            Severity::Opportunity => "Opportunity",
            Severity::Warning => "Warning",
            Severity::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// A triggered piece of advice with the figures it quotes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Mortgage takes more than 40% of salary
    RefinanceMortgage {
        mortgage_percent: Option<f64>,
        /// Salary x 0.40 in currency units
        target_payment: f64,
    },
    /// Obligations exceed salary
    MonthlyDeficit { deficit: Money },
    /// Delivery spend is high enough that a 30% cut is worth suggesting
    ReduceDelivery {
        current: Money,
        reduced: Money,
        annual_saving: Money,
    },
    /// Something is left over, but less than 10% of salary
    ThinBuffer {
        remaining: Money,
        remaining_percent: Option<f64>,
        emergency_fund: Money,
    },
    /// Mortgage within 35% and more than 15% of salary left over
    InvestSurplus { surplus: Money },
}

impl Recommendation {
    pub fn severity(&self) -> Severity {
        match self {
            Recommendation::RefinanceMortgage { .. } => Severity::Critical,
            Recommendation::MonthlyDeficit { .. } => Severity::Urgent,
            Recommendation::ReduceDelivery { .. } => Severity::Opportunity,
            Recommendation::ThinBuffer { .. } => Severity::Warning,
            Recommendation::InvestSurplus { .. } => Severity::Excellent,
        }
    }

    /// Advice text, with amounts labelled in `currency`
    pub fn message(&self, currency: Currency) -> String {
        let amount = |m: Money| format!("{} {}", format_currency(m), currency);

        match self {
            Recommendation::RefinanceMortgage {
                mortgage_percent,
                target_payment,
            } => {
                let share = match mortgage_percent {
                    Some(pct) => format!("Your mortgage is {} of your salary.", format_percent(*pct)),
                    None => "You have a mortgage payment but no salary.".to_string(),
                };
                format!(
                    "{} Consider refinancing to get it below {}/month.",
                    share,
                    format!("{} {}", format_units(*target_payment), currency)
                )
            }
            Recommendation::MonthlyDeficit { deficit } => format!(
                "You have a monthly deficit of {}. You need to reduce expenses or increase income immediately.",
                amount(*deficit)
            ),
            Recommendation::ReduceDelivery {
                current,
                reduced,
                annual_saving,
            } => format!(
                "Delivery apps cost {}/month. Reducing to {} could save {}/year.",
                amount(*current),
                amount(*reduced),
                amount(*annual_saving)
            ),
            Recommendation::ThinBuffer {
                remaining,
                remaining_percent,
                emergency_fund,
            } => format!(
                "You only have {} ({}) remaining. Build an emergency fund of at least {}.",
                amount(*remaining),
                remaining_percent.map(format_percent).unwrap_or_else(|| "n/a".to_string()),
                amount(*emergency_fund)
            ),
            Recommendation::InvestSurplus { surplus } => format!(
                "Your finances are healthy! Consider investing your surplus of {}/month.",
                amount(*surplus)
            ),
        }
    }
}

/// Evaluate every trigger against the current totals
pub fn recommendations(totals: &Totals, inputs: &AffordabilityInputs) -> Vec<Recommendation> {
    let salary = inputs.salary;
    let remaining = totals.remaining;
    let mut advice = Vec::new();

    // With no salary any positive payment is over the limit
    let mortgage_over_limit =
        match share_of_salary_cmp(inputs.mortgage_payment, salary, MODERATE_SHARE_PCT) {
            Some(ordering) => ordering == Ordering::Greater,
            None => inputs.mortgage_payment.is_positive(),
        };
    if mortgage_over_limit {
        advice.push(Recommendation::RefinanceMortgage {
            mortgage_percent: totals.mortgage_percent,
            target_payment: totals.max_affordable_40,
        });
    }

    if remaining.is_negative() {
        advice.push(Recommendation::MonthlyDeficit {
            deficit: remaining.abs(),
        });
    }

    if inputs.delivery_apps > DELIVERY_SPEND_LIMIT {
        advice.push(Recommendation::ReduceDelivery {
            current: inputs.delivery_apps,
            reduced: inputs.delivery_apps.percent(70),
            annual_saving: inputs.delivery_apps.times(12).percent(30),
        });
    }

    if remaining.is_positive() && (remaining.cents() as i128) * 10 < salary.cents() as i128 {
        advice.push(Recommendation::ThinBuffer {
            remaining,
            remaining_percent: totals.remaining_percent,
            emergency_fund: totals.total_obligations.times(3),
        });
    }

    let mortgage_conservative = matches!(
        share_of_salary_cmp(inputs.mortgage_payment, salary, CONSERVATIVE_SHARE_PCT),
        Some(Ordering::Less | Ordering::Equal)
    );
    if mortgage_conservative && (remaining.cents() as i128) * 100 > salary.cents() as i128 * 15 {
        advice.push(Recommendation::InvestSurplus { surplus: remaining });
    }

    advice
}
