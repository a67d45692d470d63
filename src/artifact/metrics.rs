//! K-fold metric artifact.
//!
//! Scores arrive as fractions and are scaled to percent exactly once, here.
//! A score already above 1 is rejected instead of being scaled a second time.

use serde::Serialize;

use super::table::Table;
use super::value::Value;
use crate::error::{ReportError, Result};
use crate::transform::scale_to_percent;

pub const METRIC_COLUMN: &str = "Metric";
pub const SCORE_COLUMN: &str = "Score";

/// One averaged metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: String,
    /// Score as stored in the artifact, in [0, 1]
    pub fraction: f64,
    /// Score scaled for display
    pub percent: f64,
}

/// Metrics in artifact row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricScores {
    entries: Vec<MetricScore>,
}

impl MetricScores {
    /// Validate and scale a metric table.
    ///
    /// # Errors
    /// Returns `MissingColumns` if either column is absent, `NonNumericCell` or
    /// `InvalidCell` for an unusable score, and `ScoreOutOfRange` for a score
    /// outside [0, 1].
    pub fn from_table(
        table: &Table,
        metric_column: &str,
        score_column: &str,
        artifact: &str,
    ) -> Result<Self> {
        let missing = table.missing_columns(&[metric_column, score_column]);
        if !missing.is_empty() {
            return Err(ReportError::MissingColumns {
                artifact: artifact.to_string(),
                columns: missing,
            });
        }

        let score_idx = table.require_column(score_column)?;

        let mut fractions = Vec::with_capacity(table.len());
        for row_idx in 0..table.len() {
            let Some(row) = table.row_map(row_idx) else {
                break;
            };
            let metric = row
                .get(metric_column)
                .map(ToString::to_string)
                .unwrap_or_default();
            let fraction = match row.get(score_column).copied() {
                None | Some(Value::Empty) => {
                    return Err(ReportError::InvalidCell {
                        row: row_idx,
                        column: score_idx,
                        reason: format!("missing score for '{metric}'"),
                    });
                }
                Some(value) => value.as_f64().ok_or_else(|| ReportError::NonNumericCell {
                    column: score_column.to_string(),
                    row: row_idx,
                    value: value.to_string(),
                })?,
            };
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ReportError::ScoreOutOfRange {
                    metric,
                    value: fraction,
                });
            }
            fractions.push((metric, fraction));
        }

        let scaled = scale_to_percent(table, score_column)?;
        let entries = fractions
            .into_iter()
            .enumerate()
            .map(|(row_idx, (metric, fraction))| MetricScore {
                metric,
                fraction,
                percent: scaled
                    .get(row_idx, score_column)
                    .and_then(Value::as_f64)
                    .unwrap_or_default(),
            })
            .collect();

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[MetricScore] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricScore> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
