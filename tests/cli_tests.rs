mod common;

use assert_cmd::Command;
use assert_fs::TempDir;
use common::household_snapshot;
use ordino_core::storage::save_snapshot;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use serde_json::Value;

const BIN_NAME: &str = "ordino_cli";

/// A home directory holding the household snapshot under `data/`.
fn seeded_home() -> TempDir {
    let home = TempDir::new().expect("tempdir");
    save_snapshot(&home.path().join("data"), &household_snapshot()).expect("seed snapshot");
    home
}

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ORDINO_HOME", home.path())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn badge_command_prints_tier_and_next_step() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["badge", "37"])
        .assert()
        .success()
        .stdout(contains("Smart Saver").and(contains("14 more to reach Budget Builder")));
}

#[test]
fn insights_json_lists_budgets_in_order() {
    let home = seeded_home();
    let output = cli(&home)
        .args(["insights", "--month", "10", "--year", "2025", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let insights: Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = insights.as_array().expect("array");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["category"], "Rent & Housing");
    assert_eq!(rows[3]["category"], "Dining Out");
    assert_eq!(rows[3]["status"], "over_budget");
}

#[test]
fn summary_prints_month_totals() {
    let home = seeded_home();
    cli(&home)
        .args(["summary", "--month", "10", "--year", "2025"])
        .assert()
        .success()
        .stdout(
            contains("=== October 2025 ===")
                .and(contains("Income:"))
                .and(contains("Savings rate:")),
        );
}

#[test]
fn explicit_data_dir_overrides_home() {
    let home = TempDir::new().expect("tempdir");
    let data = TempDir::new().expect("tempdir");
    save_snapshot(data.path(), &household_snapshot()).expect("seed snapshot");
    cli(&home)
        .arg("insights")
        .arg("--data")
        .arg(data.path())
        .args(["--month", "10", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Over budget")));
}

#[test]
fn watch_renders_a_dashboard_per_tick() {
    let home = seeded_home();
    cli(&home)
        .args(["watch", "--month", "10", "--year", "2025", "--ticks", "1"])
        .assert()
        .success()
        .stdout(contains("=== October 2025 ===").and(contains("Smart Saver")));
}

#[test]
fn watch_refuses_json_flag() {
    let home = seeded_home();
    cli(&home)
        .args(["watch", "--json", "--ticks", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("watch does not support --json"));
}

#[test]
fn out_of_range_year_fails() {
    let home = seeded_home();
    cli(&home)
        .args(["summary", "--month", "1", "--year", "300000"])
        .assert()
        .failure()
        .stderr(contains("year 300000 is outside the supported range"));
}

#[test]
fn out_of_range_month_fails() {
    let home = seeded_home();
    cli(&home)
        .args(["insights", "--month", "13", "--year", "2025"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:").and(contains("Invalid period")));
}

#[test]
fn unknown_command_prints_usage() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .arg("forecast")
        .assert()
        .failure()
        .stderr(contains("unknown command").and(contains("usage:")));
}

#[test]
fn negative_badge_count_is_rejected() {
    let home = TempDir::new().expect("tempdir");
    cli(&home)
        .args(["badge", "-4"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
