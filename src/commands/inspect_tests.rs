use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::cli::{ColorChoice, Commands, InitArgs};
use crate::error::ReportError;
use crate::output::OutputFormat;

fn make_cli() -> Cli {
    Cli {
        verbose: 0,
        quiet: false,
        color: ColorChoice::Never,
        no_config: true,
        command: Commands::Init(InitArgs {
            output: PathBuf::from(".sentiment-report.toml"),
            force: false,
        }),
    }
}

fn labeling_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("HasilLabeling.csv");
    std::fs::write(
        &path,
        "stemming_data,sentiment\nsidang sengketa,positive\nputus mk,negative\nbroken\n",
    )
    .unwrap();
    path
}

fn inspect_args(file: PathBuf, columns: &[&str], format: OutputFormat) -> InspectArgs {
    InspectArgs {
        file,
        columns: columns.iter().map(ToString::to_string).collect(),
        format,
    }
}

#[test]
fn text_summary_lists_columns_rows_and_skips() {
    let dir = TempDir::new().unwrap();
    let args = inspect_args(labeling_file(&dir), &[], OutputFormat::Text);

    let output = run_inspect_impl(&args, &make_cli()).unwrap();
    assert!(output.contains("Rows: 2"));
    assert!(output.contains("stemming_data"));
    assert!(output.contains("sentiment"));
    assert!(output.contains("Skipped 1 malformed row:"));
}

#[test]
fn json_summary_parses() {
    let dir = TempDir::new().unwrap();
    let args = inspect_args(labeling_file(&dir), &["sentiment"], OutputFormat::Json);

    let output = run_inspect_impl(&args, &make_cli()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["row_count"], 2);
    assert_eq!(parsed["skipped"].as_array().unwrap().len(), 1);
}

#[test]
fn missing_column_is_an_error() {
    let dir = TempDir::new().unwrap();
    let args = inspect_args(labeling_file(&dir), &["sentiment", "score"], OutputFormat::Text);

    let err = run_inspect_impl(&args, &make_cli()).unwrap_err();
    match err {
        ReportError::MissingColumns { columns, .. } => assert_eq!(columns, vec!["score"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    assert_eq!(run_inspect(&args, &make_cli()), EXIT_CONFIG_ERROR);
}

#[test]
fn blank_column_names_are_ignored() {
    let dir = TempDir::new().unwrap();
    let args = inspect_args(labeling_file(&dir), &["", " "], OutputFormat::Text);
    assert!(run_inspect_impl(&args, &make_cli()).is_ok());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let args = inspect_args(dir.path().join("nope.csv"), &[], OutputFormat::Text);
    assert!(matches!(
        run_inspect_impl(&args, &make_cli()),
        Err(ReportError::FileRead { .. })
    ));
}
