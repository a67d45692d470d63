use std::path::PathBuf;

use super::*;
use crate::artifact::{SkipReason, SkippedRow};
use crate::output::{ColumnKind, ColumnSummary};

#[test]
fn serializes_summary_fields() {
    let summary = ArtifactSummary {
        path: PathBuf::from("HasilLabeling.csv"),
        columns: vec![ColumnSummary {
            name: "sentiment".to_string(),
            kind: ColumnKind::Text,
        }],
        row_count: 200,
        skipped: vec![SkippedRow {
            line: Some(7),
            reason: SkipReason::FieldCount {
                expected: 2,
                found: 3,
            },
        }],
    };

    let output = JsonFormatter.format(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["path"], "HasilLabeling.csv");
    assert_eq!(parsed["row_count"], 200);
    assert_eq!(parsed["columns"][0]["name"], "sentiment");
    assert_eq!(parsed["columns"][0]["kind"], "text");
    assert_eq!(parsed["skipped"][0]["line"], 7);
    assert_eq!(parsed["skipped"][0]["reason"]["kind"], "field_count");
    assert_eq!(parsed["skipped"][0]["reason"]["found"], 3);
}

#[test]
fn empty_skip_list_is_an_array() {
    let summary = ArtifactSummary {
        path: PathBuf::from("a.csv"),
        columns: Vec::new(),
        row_count: 0,
        skipped: Vec::new(),
    };
    let parsed: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format(&summary).unwrap()).unwrap();
    assert!(parsed["skipped"].as_array().unwrap().is_empty());
}
