//! Affordability input record
//!
//! The monthly figures a household enters: income, the mortgage payment, and
//! the itemized living expenses. Two groups (utilities and car) have a fixed
//! set of named sub-fields.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::money::Money;

/// Monthly utility bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Utilities {
    pub electricity: Money,
    pub water: Money,
    /// Home maintenance
    pub maintenance: Money,
    pub internet: Money,
    pub mobile: Money,
}

impl Utilities {
    /// Labelled sub-fields in display order
    pub fn items(&self) -> [(&'static str, Money); 5] {
        [
            ("Electricity", self.electricity),
            ("Water", self.water),
            ("Maintenance", self.maintenance),
            ("Internet", self.internet),
            ("Mobile", self.mobile),
        ]
    }

    /// Sum of all utility bills
    pub fn total(&self) -> Money {
        self.items().into_iter().map(|(_, amount)| amount).sum()
    }
}

/// Monthly car running costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarExpenses {
    pub gas: Money,
    pub maintenance: Money,
    pub insurance: Money,
}

impl CarExpenses {
    /// Labelled sub-fields in display order
    pub fn items(&self) -> [(&'static str, Money); 3] {
        [
            ("Gas", self.gas),
            ("Maintenance", self.maintenance),
            ("Insurance", self.insurance),
        ]
    }

    /// Sum of all car costs
    pub fn total(&self) -> Money {
        self.items().into_iter().map(|(_, amount)| amount).sum()
    }
}

/// Everything the calculator needs, as entered by the user
///
/// Fields missing from a scenario file deserialize to zero (and the currency
/// to SAR). Use [`AffordabilityInputs::baseline`] for the prefilled example
/// household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityInputs {
    /// Monthly take-home salary
    #[serde(default)]
    pub salary: Money,

    /// Monthly mortgage payment
    #[serde(default)]
    pub mortgage_payment: Money,

    /// Display label for all amounts
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub utilities: Utilities,

    #[serde(default)]
    pub car: CarExpenses,

    #[serde(default)]
    pub family_expenses: Money,

    #[serde(default)]
    pub groceries: Money,

    #[serde(default)]
    pub delivery_apps: Money,

    #[serde(default)]
    pub subscriptions: Money,

    /// School fees, averaged per month
    #[serde(default)]
    pub school: Money,
}

impl AffordabilityInputs {
    /// The prefilled example household
    pub fn baseline() -> Self {
        Self {
            salary: Money::from_units(23780),
            mortgage_payment: Money::from_units(12000),
            currency: Currency::Sar,
            utilities: Utilities {
                electricity: Money::from_units(900),
                water: Money::from_units(100),
                maintenance: Money::from_units(600),
                internet: Money::from_units(450),
                mobile: Money::from_units(500),
            },
            car: CarExpenses {
                gas: Money::from_units(800),
                maintenance: Money::from_units(1000),
                insurance: Money::from_units(400),
            },
            family_expenses: Money::from_units(3000),
            groceries: Money::from_units(1500),
            delivery_apps: Money::from_units(1000),
            subscriptions: Money::from_units(250),
            school: Money::from_cents(191667),
        }
    }

    /// Builder-style currency override
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for AffordabilityInputs {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_group_totals() {
        let inputs = AffordabilityInputs::baseline();
        assert_eq!(inputs.utilities.total(), Money::from_units(2550));
        assert_eq!(inputs.car.total(), Money::from_units(2200));
    }

    #[test]
    fn test_missing_fields_deserialize_to_zero() {
        let inputs: AffordabilityInputs =
            serde_json::from_str(r#"{"salary": 10000, "utilities": {"water": 120.5}}"#).unwrap();

        assert_eq!(inputs.salary, Money::from_units(10000));
        assert_eq!(inputs.mortgage_payment, Money::zero());
        assert_eq!(inputs.utilities.water, Money::from_cents(12050));
        assert_eq!(inputs.utilities.electricity, Money::zero());
        assert_eq!(inputs.car.total(), Money::zero());
        assert_eq!(inputs.currency, Currency::Sar);
    }

    #[test]
    fn test_yaml_scenario() {
        let yaml = "salary: 15000\nmortgage_payment: 4000\ncurrency: USD\ncar:\n  gas: 300\n";
        let inputs: AffordabilityInputs = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(inputs.currency, Currency::Usd);
        assert_eq!(inputs.car.gas, Money::from_units(300));
        assert_eq!(inputs.mortgage_payment, Money::from_units(4000));
    }

    #[test]
    fn test_with_currency() {
        let inputs = AffordabilityInputs::baseline().with_currency(Currency::Eur);
        assert_eq!(inputs.currency, Currency::Eur);
        assert_eq!(inputs.salary, Money::from_units(23780));
    }
}
