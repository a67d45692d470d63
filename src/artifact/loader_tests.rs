use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn load_str(input: &[u8], expected: Option<&[&str]>) -> Result<LoadedTable> {
    ArtifactLoader::new().load_reader(input, "test.csv", expected)
}

#[test]
fn loads_header_and_rows() {
    let loaded = load_str(b"Metric,Score\nAccuracy,0.72\nPrecision,0.75\n", None).unwrap();

    assert_eq!(loaded.table.columns(), ["Metric", "Score"]);
    assert_eq!(loaded.table.len(), 2);
    assert_eq!(loaded.table.get(0, "Score"), Some(&Value::float(0.72)));
    assert_eq!(loaded.skipped_count(), 0);
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let loaded = load_str(
        b"full_text,sentiment\n\"mk putus, sengketa selesai\",positive\n",
        None,
    )
    .unwrap();

    assert_eq!(
        loaded.table.get(0, "full_text"),
        Some(&Value::Text("mk putus, sengketa selesai".to_string()))
    );
}

#[test]
fn rows_with_wrong_field_count_are_skipped() {
    let loaded = load_str(b"a,b\n1,2\n1,2,3\n4\n5,6\n", None).unwrap();

    assert_eq!(loaded.table.len(), 2);
    assert_eq!(loaded.skipped_count(), 2);
    assert_eq!(
        loaded.skipped[0].reason,
        SkipReason::FieldCount {
            expected: 2,
            found: 3
        }
    );
    assert_eq!(loaded.skipped[0].line, Some(3));
    assert_eq!(loaded.table.get(1, "a"), Some(&Value::integer(5)));
}

#[test]
fn rows_with_invalid_utf8_are_skipped() {
    let loaded = load_str(b"text,sentiment\nok,positive\n\xff\xfe,negative\nfine,negative\n", None)
        .unwrap();

    assert_eq!(loaded.table.len(), 2);
    assert_eq!(
        loaded.skipped[0].reason,
        SkipReason::InvalidUtf8 { field: 0 }
    );
}

#[test]
fn missing_expected_columns_names_each() {
    let err = load_str(
        b"Actual Negative,Other\n50,5\n",
        Some(&["Actual Negative", "Predicted Negative"]),
    )
    .unwrap_err();

    match err {
        ReportError::MissingColumns { artifact, columns } => {
            assert_eq!(artifact, "test.csv");
            assert_eq!(columns, vec!["Predicted Negative"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_input_is_an_error() {
    let err = load_str(b"", None).unwrap_err();
    assert!(matches!(err, ReportError::EmptyArtifact { .. }));
}

#[test]
fn header_only_yields_empty_table() {
    let loaded = load_str(b"Metric,Score\n", Some(&["Score"])).unwrap();
    assert!(loaded.table.is_empty());
    assert_eq!(loaded.table.columns().len(), 2);
}

#[test]
fn invalid_utf8_header_is_fatal() {
    let err = load_str(b"\xffMetric,Score\nA,0.1\n", None).unwrap_err();
    assert!(matches!(err, ReportError::InvalidHeader { .. }));
}

#[test]
fn byte_order_mark_is_ignored() {
    let loaded = load_str(b"\xef\xbb\xbfMetric,Score\nF1,0.7\n", Some(&["Metric"])).unwrap();
    assert_eq!(loaded.table.columns()[0], "Metric");
}

#[test]
fn header_names_are_matched_exactly() {
    let loaded = load_str(b"Actual Negative ,Predicted Negative\n50,45\n", None).unwrap();
    assert_eq!(loaded.table.columns(), ["Actual Negative ", "Predicted Negative"]);

    let err = load_str(
        b"Actual Negative ,Predicted Negative\n50,45\n",
        Some(&["Actual Negative", "Predicted Negative"]),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::MissingColumns { columns, .. } if columns == ["Actual Negative"]));
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "stemming_data,sentiment\nadil,positive\ncurang,negative\n").unwrap();

    let loaded = ArtifactLoader::new()
        .load(file.path(), Some(&["sentiment"]))
        .unwrap();
    assert_eq!(loaded.table.len(), 2);
}

#[test]
fn load_missing_file_reports_path() {
    let err = ArtifactLoader::new()
        .load(Path::new("/nonexistent/average_scores.csv"), None)
        .unwrap_err();
    assert!(matches!(err, ReportError::FileRead { .. }));
    assert!(err.to_string().contains("average_scores.csv"));
}
