use super::*;
use crate::artifact::ArtifactLoader;

fn scores(input: &str) -> Result<MetricScores> {
    let table = ArtifactLoader::new()
        .load_reader(input.as_bytes(), "average_scores.csv", None)?
        .table;
    MetricScores::from_table(&table, METRIC_COLUMN, SCORE_COLUMN, "average_scores.csv")
}

#[test]
fn scales_each_score_once_in_row_order() {
    let scores = scores("Metric,Score\nAccuracy,0.72\nPrecision,0.75\nRecall,0.77\n").unwrap();

    let metrics: Vec<&str> = scores.iter().map(|s| s.metric.as_str()).collect();
    assert_eq!(metrics, vec!["Accuracy", "Precision", "Recall"]);

    let percents: Vec<String> = scores.iter().map(|s| format!("{:.2}", s.percent)).collect();
    assert_eq!(percents, vec!["72.00", "75.00", "77.00"]);
    assert!((scores.entries()[0].fraction - 0.72).abs() < f64::EPSILON);
}

#[test]
fn score_already_in_percent_is_rejected() {
    let err = scores("Metric,Score\nAccuracy,72.0\n").unwrap_err();
    assert!(matches!(err, ReportError::ScoreOutOfRange { ref metric, .. } if metric == "Accuracy"));
}

#[test]
fn negative_score_is_rejected() {
    assert!(matches!(
        scores("Metric,Score\nF1,-0.1\n"),
        Err(ReportError::ScoreOutOfRange { .. })
    ));
}

#[test]
fn value_column_is_not_an_alias_for_score() {
    let err = scores("Metric,Value\nAccuracy,0.72\n").unwrap_err();
    assert!(matches!(err, ReportError::MissingColumns { ref columns, .. } if columns == &["Score"]));
}

#[test]
fn text_score_is_rejected() {
    assert!(matches!(
        scores("Metric,Score\nAccuracy,high\n"),
        Err(ReportError::NonNumericCell { row: 0, .. })
    ));
}

#[test]
fn empty_score_is_rejected() {
    assert!(matches!(
        scores("Metric,Score\nAccuracy,\n"),
        Err(ReportError::InvalidCell { .. })
    ));
}

#[test]
fn custom_score_column() {
    let table = ArtifactLoader::new()
        .load_reader(&b"Metric,Mean\nF1,0.7\n"[..], "a.csv", None)
        .unwrap()
        .table;
    let scores = MetricScores::from_table(&table, "Metric", "Mean", "a.csv").unwrap();
    assert_eq!(scores.len(), 1);
    assert!((scores.entries()[0].percent - 70.0).abs() < 1e-9);
}

#[test]
fn header_only_gives_no_scores() {
    assert!(scores("Metric,Score\n").unwrap().is_empty());
}
