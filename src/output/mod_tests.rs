use std::path::PathBuf;

use super::*;

fn sample_summary() -> ArtifactSummary {
    ArtifactSummary {
        path: PathBuf::from("average_scores.csv"),
        columns: vec![ColumnSummary {
            name: "Score".to_string(),
            kind: ColumnKind::Float,
        }],
        row_count: 4,
        skipped: Vec::new(),
    }
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_dispatches_on_format() {
    let summary = sample_summary();

    let text = OutputFormat::Text
        .formatter(ColorMode::Never)
        .format(&summary)
        .unwrap();
    assert!(text.contains("Rows: 4"));

    let json = OutputFormat::Json
        .formatter(ColorMode::Never)
        .format(&summary)
        .unwrap();
    assert!(json.contains("\"row_count\": 4"));
}
