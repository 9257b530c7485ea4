//! Affordability calculator
//!
//! Maps an [`AffordabilityInputs`] record to its derived totals, ratios and
//! risk tier. Every function here is pure: the same inputs always give the
//! same outputs and nothing is cached between calls.

use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::models::{AffordabilityInputs, Money, RiskLevel};

use super::recommendations::{recommendations, Recommendation};

/// Share of salary considered a conservative mortgage payment
pub const CONSERVATIVE_SHARE_PCT: i64 = 35;
/// Share of salary considered the upper manageable mortgage payment
pub const MODERATE_SHARE_PCT: i64 = 40;

/// Derived figures for one set of inputs
///
/// Ratios are `None` when salary is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub total_utilities: Money,
    pub total_car: Money,
    /// Groceries plus delivery apps
    pub food_total: Money,
    pub total_living_expenses: Money,
    pub total_obligations: Money,
    /// Salary minus all obligations; negative means a monthly deficit
    pub remaining: Money,
    pub mortgage_percent: Option<f64>,
    pub living_percent: Option<f64>,
    pub total_percent: Option<f64>,
    pub remaining_percent: Option<f64>,
    /// Salary x 0.35 in currency units, unrounded
    pub max_affordable_35: f64,
    /// Salary x 0.40 in currency units, unrounded
    pub max_affordable_40: f64,
    /// Mortgage payment / salary
    pub dti: Option<f64>,
    pub risk: RiskLevel,
}

/// Compute every derived figure from the inputs
pub fn compute_totals(inputs: &AffordabilityInputs) -> Totals {
    let salary = inputs.salary;

    let total_utilities = inputs.utilities.total();
    let total_car = inputs.car.total();
    let food_total = inputs.groceries + inputs.delivery_apps;
    let total_living_expenses = total_utilities
        + inputs.family_expenses
        + food_total
        + inputs.subscriptions
        + inputs.school
        + total_car;
    let total_obligations = inputs.mortgage_payment + total_living_expenses;
    let remaining = salary - total_obligations;

    let dti = inputs.mortgage_payment.ratio_of(salary);
    let risk = classify_risk(dti);

    debug!(
        salary = %salary,
        obligations = %total_obligations,
        remaining = %remaining,
        ?dti,
        risk = %risk,
        "computed affordability totals"
    );

    Totals {
        total_utilities,
        total_car,
        food_total,
        total_living_expenses,
        total_obligations,
        remaining,
        mortgage_percent: inputs.mortgage_payment.percent_of(salary),
        living_percent: total_living_expenses.percent_of(salary),
        total_percent: total_obligations.percent_of(salary),
        remaining_percent: remaining.percent_of(salary),
        max_affordable_35: salary.percent_units(CONSERVATIVE_SHARE_PCT),
        max_affordable_40: salary.percent_units(MODERATE_SHARE_PCT),
        dti,
        risk,
    }
}

/// Risk tier for a DTI; an undefined DTI (no salary) is Very High
pub fn classify_risk(dti: Option<f64>) -> RiskLevel {
    dti.map(RiskLevel::classify).unwrap_or(RiskLevel::VeryHigh)
}

/// Compare `amount / salary` against `pct` percent without dividing
///
/// Returns `None` when salary is zero.
pub fn share_of_salary_cmp(amount: Money, salary: Money, pct: i64) -> Option<Ordering> {
    let amount = amount.cents() as i128 * 100;
    let limit = salary.cents() as i128 * pct as i128;
    match salary.cents().cmp(&0) {
        Ordering::Equal => None,
        Ordering::Greater => Some(amount.cmp(&limit)),
        // Dividing by a negative salary flips the inequality
        Ordering::Less => Some(limit.cmp(&amount)),
    }
}

/// One line of the expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub name: &'static str,
    pub amount: Money,
    /// Percentage of salary, `None` when salary is zero
    pub percent: Option<f64>,
}

/// Mortgage plus the six living-expense groups, each as a share of salary
pub fn expense_breakdown(inputs: &AffordabilityInputs, totals: &Totals) -> Vec<BreakdownItem> {
    [
        ("Mortgage Payment", inputs.mortgage_payment),
        ("Utilities", totals.total_utilities),
        ("Family Expenses", inputs.family_expenses),
        ("Food & Groceries", totals.food_total),
        ("Car Expenses", totals.total_car),
        ("School", inputs.school),
        ("Subscriptions", inputs.subscriptions),
    ]
    .into_iter()
    .map(|(name, amount)| BreakdownItem {
        name,
        amount,
        percent: amount.percent_of(inputs.salary),
    })
    .collect()
}

/// Monthly figures scaled to a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualProjection {
    pub salary: Money,
    pub mortgage: Money,
    pub living_expenses: Money,
    pub savings: Money,
}

impl AnnualProjection {
    pub fn new(inputs: &AffordabilityInputs, totals: &Totals) -> Self {
        Self {
            salary: inputs.salary.times(12),
            mortgage: inputs.mortgage_payment.times(12),
            living_expenses: totals.total_living_expenses.times(12),
            savings: totals.remaining.times(12),
        }
    }
}

/// Inputs together with everything derived from them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub inputs: AffordabilityInputs,
    pub totals: Totals,
    pub breakdown: Vec<BreakdownItem>,
    pub annual: AnnualProjection,
    pub recommendations: Vec<Recommendation>,
}

/// Runs the calculator over one input record
pub struct AffordabilityService<'a> {
    inputs: &'a AffordabilityInputs,
}

impl<'a> AffordabilityService<'a> {
    /// Create a calculator for the given inputs
    pub fn new(inputs: &'a AffordabilityInputs) -> Self {
        Self { inputs }
    }

    /// Derived totals only
    pub fn totals(&self) -> Totals {
        compute_totals(self.inputs)
    }

    /// Full assessment: totals, breakdown, projections and recommendations
    pub fn assess(&self) -> Assessment {
        let totals = self.totals();
        let breakdown = expense_breakdown(self.inputs, &totals);
        let annual = AnnualProjection::new(self.inputs, &totals);
        let recommendations = recommendations(&totals, self.inputs);

        debug!(
            recommendation_count = recommendations.len(),
            "assessment complete"
        );

        Assessment {
            inputs: self.inputs.clone(),
            totals,
            breakdown,
            annual,
            recommendations,
        }
    }
}
