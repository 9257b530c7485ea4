use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn afford(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("afford").unwrap();
    cmd.env("AFFORD_CLI_DATA_DIR", data_dir.path())
        .env_remove("AFFORD_SCENARIO")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn dashboard_is_the_default_view() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mortgage Affordability Dashboard (SAR)"))
        .stdout(predicate::str::contains("Very High"))
        .stdout(predicate::str::contains("-637 SAR"))
        .stdout(predicate::str::contains("You're overspending by 637 SAR/month"));
}

#[test]
fn overrides_change_the_outcome() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--salary", "60000", "--currency", "usd", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard (USD)"))
        .stdout(predicate::str::contains("Risk Level:            Safe"))
        .stdout(predicate::str::contains("Monthly Deficit").not());
}

#[test]
fn overrides_are_accepted_after_the_subcommand() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["analysis", "--delivery", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Urgent: You have a monthly deficit"))
        .stdout(predicate::str::contains("Opportunity:").not());
}

#[test]
fn zero_salary_prints_na() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--salary", "0", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"))
        .stdout(predicate::str::contains("NaN").not())
        .stdout(predicate::str::contains("inf").not());
}

#[test]
fn expenses_view_lists_items() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .arg("expenses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Utilities"))
        .stdout(predicate::str::contains("2,550 SAR"))
        .stdout(predicate::str::contains("Total Living Expenses: 12,417 SAR"));
}

#[test]
fn invalid_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--salary", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn unknown_currency_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--currency", "GBP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown currency"));
}

#[test]
fn export_json_to_stdout() {
    let data_dir = TempDir::new().unwrap();

    let output = afford(&data_dir)
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["totals"]["total_living_expenses"], 12416.67);
    assert_eq!(value["totals"]["risk"], "very_high");
}

#[test]
fn template_roundtrips_through_file_option() {
    let data_dir = TempDir::new().unwrap();
    let scenario = data_dir.path().join("household.yaml");

    afford(&data_dir)
        .args(["--salary", "40000", "--mortgage", "9000", "template", "--output"])
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario written to"));

    afford(&data_dir)
        .arg("--file")
        .arg(&scenario)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Debt-to-Income Ratio:  22.5%"))
        .stdout(predicate::str::contains("Risk Level:            Safe"));
}

#[test]
fn unsupported_scenario_extension_fails() {
    let data_dir = TempDir::new().unwrap();
    let scenario = data_dir.path().join("household.toml");
    std::fs::write(&scenario, "salary = 1").unwrap();

    afford(&data_dir)
        .arg("--file")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scenario file"));
}

#[test]
fn init_writes_settings_and_scenario() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("scenario.json").exists());

    afford(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeping existing scenario"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default currency: SAR"))
        .stdout(predicate::str::contains("scenario.json"));
}

#[test]
fn oversized_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--salary", "3000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount out of range"));
}

#[test]
fn largest_accepted_salary_reports_exact_limits() {
    let data_dir = TempDir::new().unwrap();

    afford(&data_dir)
        .args(["--salary", "1000000000000", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("350,000,000,000 SAR"))
        .stdout(predicate::str::contains("400,000,000,000 SAR"))
        .stdout(predicate::str::contains("Risk Level:            Safe"));
}
