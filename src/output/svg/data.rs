//! Chart data model.

use super::style::ChartColor;
use crate::transform::CategoryCount;

/// A single data point for charts.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Label for this data point (shown on axis or tooltip)
    pub label: String,
    /// Numeric value
    pub value: f64,
    /// Text drawn next to the mark; defaults to the value itself
    pub annotation: Option<String>,
    /// Optional color override
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            annotation: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }

    /// Annotation text, falling back to the plain value.
    #[must_use]
    pub fn annotation_text(&self) -> String {
        self.annotation
            .clone()
            .unwrap_or_else(|| self.value.to_string())
    }
}

impl From<&CategoryCount> for DataPoint {
    #[allow(clippy::cast_precision_loss)]
    fn from(entry: &CategoryCount) -> Self {
        Self::new(entry.label.clone(), entry.count as f64).with_annotation(entry.count.to_string())
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
