//! Integration tests for the kick CLI binary.
//!
//! These tests verify end-to-end behavior including:
//! - Habit creation and listing
//! - Check-off workflow (including back-dating and idempotency)
//! - Statistics output against known histories
//! - Aggregate reports, seeding, CSV export
//! - Data persistence across invocations

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TODAY: &str = "2024-04-23";

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("kick"))
}

/// Helper running a subcommand against a data dir with the frozen test date
fn kick(data_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = cli();
    cmd.args(args)
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--today")
        .arg(TODAY);
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Habit kicking tracker with streak and resistance statistics",
        ));
}

#[test]
fn test_add_and_list() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["add", "Swearstorming", "--periodicity", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now tracking \"Swearstorming\""));

    kick(data_dir, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swearstorming"))
        .stdout(predicate::str::contains("Daily"));

    // The store file persists across invocations
    assert!(data_dir.join("habits.json").exists());
}

#[test]
fn test_add_duplicate_is_skipped() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["add", "Rushing", "--periodicity", "weekly"])
        .assert()
        .success();

    kick(data_dir, &["add", "Rushing", "--periodicity", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // The original periodicity survives
    kick(data_dir, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly"));
}

#[test]
fn test_add_rejects_unknown_periodicity() {
    let temp_dir = setup_test_dir();

    kick(temp_dir.path(), &["add", "Hoarding", "--periodicity", "fortnightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnightly"));
}

#[test]
fn test_done_is_idempotent_per_period() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["add", "Rushing", "--periodicity", "weekly"])
        .assert()
        .success();

    kick(data_dir, &["done", "Rushing", "--date", "2024-04-22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sadly marked done"));

    // Another date in the same week hits the same period
    kick(data_dir, &["done", "Rushing", "--date", "2024-04-23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already marked"));
}

#[test]
fn test_done_unknown_habit_fails() {
    let temp_dir = setup_test_dir();

    kick(temp_dir.path(), &["done", "Nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no habit named 'Nonexistent'"));
}

#[test]
fn test_show_statistics_for_known_history() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(
        data_dir,
        &[
            "add",
            "Swearstorming",
            "--periodicity",
            "daily",
            "--start-date",
            "2024-03-23",
        ],
    )
    .assert()
    .success();

    for date in [
        "2024-03-23",
        "2024-03-24",
        "2024-03-25",
        "2024-03-26",
        "2024-03-27",
        "2024-04-23",
    ] {
        kick(data_dir, &["done", "Swearstorming", "--date", date])
            .assert()
            .success();
    }

    kick(data_dir, &["show", "Swearstorming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak:             1"))
        .stdout(predicate::str::contains("Total periods of guilt:     6"))
        .stdout(predicate::str::contains("Total periods of innocence: 26"))
        .stdout(predicate::str::contains("Resistance ratio:           81.25%"))
        .stdout(predicate::str::contains("Longest streak:             5"))
        .stdout(predicate::str::contains("Average streak:             3.00"));
}

#[test]
fn test_back_dated_check_off_widens_tracking_window() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(
        data_dir,
        &[
            "add",
            "Overanalyzing",
            "--periodicity",
            "daily",
            "--start-date",
            "2024-04-01",
        ],
    )
    .assert()
    .success();

    kick(data_dir, &["done", "Overanalyzing", "--date", "2024-03-15"])
        .assert()
        .success();

    kick(data_dir, &["show", "Overanalyzing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recording from: 2024/03/15"));
}

#[test]
fn test_seed_and_report_all() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 5 sample habits"));

    // Seeding again changes nothing
    kick(data_dir, &["seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));

    kick(data_dir, &["report", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rushing"))
        .stdout(predicate::str::contains("70.59%"))
        .stdout(predicate::str::contains("37.50%"));
}

#[test]
fn test_report_filters_by_periodicity() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["seed"]).assert().success();

    kick(data_dir, &["report", "all", "--periodicity", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Procrastipondering"))
        .stdout(predicate::str::contains("Rushing").not());
}

#[test]
fn test_report_current_streak_leader() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["seed"]).assert().success();

    kick(data_dir, &["report", "current"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Longest-run current streak:"))
        .stdout(predicate::str::contains("Overanalyzing"))
        .stdout(predicate::str::contains("current streak 4"));
}

#[test]
fn test_report_resistance_extremes() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["seed"]).assert().success();

    kick(data_dir, &["report", "resistance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lowest   Procrastipondering"))
        .stdout(predicate::str::contains("Highest  Binge watching"));
}

#[test]
fn test_export_creates_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["seed"]).assert().success();

    kick(data_dir, &["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported statistics for 5 habits"));

    let csv_path = data_dir.join("stats.csv");
    let contents = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(contents.starts_with("name,recording_from,periodicity"));
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn test_delete_habit() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    kick(data_dir, &["add", "Rushing", "--periodicity", "weekly"])
        .assert()
        .success();

    kick(data_dir, &["delete", "Rushing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully deleted"));

    kick(data_dir, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits tracked yet."));

    kick(data_dir, &["delete", "Rushing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no habit named 'Rushing'"));
}

#[test]
fn test_malformed_store_is_surfaced_not_defaulted() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    fs::write(data_dir.join("habits.json"), "{ invalid json }").unwrap();

    kick(data_dir, &["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed habit store"));
}
