//! Input record resolution for CLI commands
//!
//! Builds the [`AffordabilityInputs`] a command works on from the baseline
//! household, a scenario file and per-field command-line overrides.

use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{AffordPaths, Settings};
use crate::error::AffordResult;
use crate::export::load_scenario;
use crate::models::{AffordabilityInputs, Currency, Money};

/// Scenario selection and per-field overrides shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Scenario file to load (.json, .yaml or .yml)
    #[arg(short, long, global = true, env = "AFFORD_SCENARIO")]
    pub file: Option<PathBuf>,

    /// Currency label (SAR, USD, EUR, AED)
    #[arg(long, global = true)]
    pub currency: Option<Currency>,

    /// Monthly salary
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub salary: Option<Money>,

    /// Monthly mortgage payment
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub mortgage: Option<Money>,

    /// Electricity bill
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Utilities")]
    pub electricity: Option<Money>,

    /// Water bill
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Utilities")]
    pub water: Option<Money>,

    /// Home maintenance
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Utilities")]
    pub home_maintenance: Option<Money>,

    /// Internet bill
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Utilities")]
    pub internet: Option<Money>,

    /// Mobile phone bill
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Utilities")]
    pub mobile: Option<Money>,

    /// Car fuel
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Car")]
    pub gas: Option<Money>,

    /// Car maintenance
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Car")]
    pub car_maintenance: Option<Money>,

    /// Car insurance
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Car")]
    pub car_insurance: Option<Money>,

    /// Family expenses
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Other expenses")]
    pub family: Option<Money>,

    /// Groceries
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Other expenses")]
    pub groceries: Option<Money>,

    /// Delivery apps
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Other expenses")]
    pub delivery: Option<Money>,

    /// Subscriptions
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Other expenses")]
    pub subscriptions: Option<Money>,

    /// School fees per month
    #[arg(long, global = true, allow_negative_numbers = true, help_heading = "Other expenses")]
    pub school: Option<Money>,
}

fn apply(field: &mut Money, value: Option<Money>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl InputArgs {
    /// Resolve the inputs for this invocation
    ///
    /// Starts from `--file`, else the saved scenario, else the baseline in
    /// the settings' default currency; then applies overrides.
    pub fn resolve(&self, paths: &AffordPaths, settings: &Settings) -> AffordResult<AffordabilityInputs> {
        let saved = paths.scenario_file();

        let mut inputs = if let Some(path) = &self.file {
            info!(path = %path.display(), "using scenario file");
            load_scenario(path)?
        } else if saved.exists() {
            debug!(path = %saved.display(), "using saved scenario");
            load_scenario(&saved)?
        } else {
            AffordabilityInputs::baseline().with_currency(settings.default_currency)
        };

        self.apply_overrides(&mut inputs);
        Ok(inputs)
    }

    /// Apply every command-line override that was given
    pub fn apply_overrides(&self, inputs: &mut AffordabilityInputs) {
        if let Some(currency) = self.currency {
            inputs.currency = currency;
        }

        apply(&mut inputs.salary, self.salary);
        apply(&mut inputs.mortgage_payment, self.mortgage);

        apply(&mut inputs.utilities.electricity, self.electricity);
        apply(&mut inputs.utilities.water, self.water);
        apply(&mut inputs.utilities.maintenance, self.home_maintenance);
        apply(&mut inputs.utilities.internet, self.internet);
        apply(&mut inputs.utilities.mobile, self.mobile);

        apply(&mut inputs.car.gas, self.gas);
        apply(&mut inputs.car.maintenance, self.car_maintenance);
        apply(&mut inputs.car.insurance, self.car_insurance);

        apply(&mut inputs.family_expenses, self.family);
        apply(&mut inputs.groceries, self.groceries);
        apply(&mut inputs.delivery_apps, self.delivery);
        apply(&mut inputs.subscriptions, self.subscriptions);
        apply(&mut inputs.school, self.school);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_scenario, ScenarioFormat};
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, AffordPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AffordPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_baseline_uses_settings_currency() {
        let (_temp_dir, paths) = temp_paths();
        let settings = Settings {
            default_currency: Currency::Usd,
            ..Settings::default()
        };

        let inputs = InputArgs::default().resolve(&paths, &settings).unwrap();
        assert_eq!(inputs, AffordabilityInputs::baseline().with_currency(Currency::Usd));
    }

    #[test]
    fn test_overrides_apply_last() {
        let (_temp_dir, paths) = temp_paths();
        let args = InputArgs {
            salary: Some(Money::from_units(30000)),
            home_maintenance: Some(Money::zero()),
            car_insurance: Some(Money::from_units(650)),
            currency: Some(Currency::Eur),
            ..InputArgs::default()
        };

        let inputs = args.resolve(&paths, &Settings::default()).unwrap();
        assert_eq!(inputs.salary, Money::from_units(30000));
        assert_eq!(inputs.utilities.maintenance, Money::zero());
        assert_eq!(inputs.car.insurance, Money::from_units(650));
        assert_eq!(inputs.car.maintenance, Money::from_units(1000));
        assert_eq!(inputs.currency, Currency::Eur);
    }

    #[test]
    fn test_saved_scenario_is_used() {
        let (_temp_dir, paths) = temp_paths();
        let saved = AffordabilityInputs {
            salary: Money::from_units(12345),
            ..AffordabilityInputs::baseline()
        };
        let mut file = std::fs::File::create(paths.scenario_file()).unwrap();
        export_scenario(&saved, ScenarioFormat::Json, &mut file).unwrap();

        let inputs = InputArgs::default().resolve(&paths, &Settings::default()).unwrap();
        assert_eq!(inputs.salary, Money::from_units(12345));
    }

    #[test]
    fn test_file_wins_over_saved_scenario() {
        let (temp_dir, paths) = temp_paths();
        std::fs::write(paths.scenario_file(), r#"{"salary": 1}"#).unwrap();
        let explicit = temp_dir.path().join("other.yml");
        std::fs::write(&explicit, "salary: 2\n").unwrap();

        let args = InputArgs {
            file: Some(explicit),
            ..InputArgs::default()
        };
        let inputs = args.resolve(&paths, &Settings::default()).unwrap();
        assert_eq!(inputs.salary, Money::from_units(2));
    }
}
