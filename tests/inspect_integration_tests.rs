//! Integration tests for the `inspect` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn inspect_prints_columns_and_rows() {
    let fixture = TestFixture::with_artifacts();

    fixture
        .command()
        .args(["inspect", "average_scores.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 4"))
        .stdout(predicate::str::contains("Columns (2):"))
        .stdout(predicate::str::contains("Metric"))
        .stdout(predicate::str::contains("float"));
}

#[test]
fn inspect_reports_skipped_rows() {
    let fixture = TestFixture::new();
    fixture.create_file("scores.csv", "Metric,Score\nAccuracy,0.7\nbroken\nRecall,0.8\n");

    fixture
        .command()
        .args(["inspect", "scores.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 2"))
        .stdout(predicate::str::contains("Skipped 1 malformed row:"))
        .stdout(predicate::str::contains("line 3"));
}

#[test]
fn inspect_json_output() {
    let fixture = TestFixture::with_artifacts();

    let output = fixture
        .command()
        .args(["inspect", "HasilLabeling.csv", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["row_count"], 200);
    assert_eq!(parsed["columns"][1]["name"], "sentiment");
}

#[test]
fn inspect_missing_column_exits_two() {
    let fixture = TestFixture::with_artifacts();

    fixture
        .command()
        .args(["inspect", "confusion_matrix.csv", "--columns", "Actual Negative,Predicted Positive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ MissingColumn"))
        .stderr(predicate::str::contains("Predicted Positive"));
}

#[test]
fn inspect_missing_file_exits_two() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["inspect", "nope.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ IO"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn inspect_empty_file_is_parse_error() {
    let fixture = TestFixture::new();
    fixture.create_file("empty.csv", "");

    fixture
        .command()
        .args(["inspect", "empty.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No columns to parse"));
}
