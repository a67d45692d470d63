//! Tests for chart data model.

use super::*;
use crate::output::svg::style::ChartColor;

#[test]
fn new_creates_point() {
    let point = DataPoint::new("Accuracy", 72.0);
    assert_eq!(point.label, "Accuracy");
    assert!((point.value - 72.0).abs() < f64::EPSILON);
    assert!(point.color.is_none());
    assert_eq!(point.annotation_text(), "72");
}

#[test]
fn with_color_sets_color() {
    let point = DataPoint::new("test", 50.0).with_color(ChartColor::hex("#fff"));
    assert!(point.color.is_some());
}

#[test]
fn annotation_overrides_value_text() {
    let point = DataPoint::new("Recall", 77.0).with_annotation("77.00%");
    assert_eq!(point.annotation_text(), "77.00%");
}

#[test]
fn from_category_count_keeps_exact_integer() {
    let entry = CategoryCount {
        label: "Positive".to_string(),
        count: 120,
    };
    let point = DataPoint::from(&entry);
    assert_eq!(point.label, "Positive");
    assert_eq!(point.annotation_text(), "120");
}
