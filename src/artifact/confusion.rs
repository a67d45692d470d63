//! 2x2 confusion matrix artifact.

use serde::Serialize;

use super::table::Table;
use crate::error::{ReportError, Result};

pub const ACTUAL_NEGATIVE: &str = "Actual Negative";
pub const PREDICTED_NEGATIVE: &str = "Predicted Negative";

/// Columns whose presence marks a table as a confusion artifact.
pub const REQUIRED_COLUMNS: [&str; 2] = [ACTUAL_NEGATIVE, PREDICTED_NEGATIVE];

/// Row meaning, top to bottom. Fixed by convention, not read from the file.
pub const ROW_LABELS: [&str; 2] = ["Actual Negative", "Actual Positive"];

/// Column meaning, left to right. Fixed by convention, not read from the file.
pub const COLUMN_LABELS: [&str; 2] = ["Predicted Negative", "Predicted Positive"];

/// Prediction counts against ground truth, `cells[actual][predicted]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    cells: [[u64; 2]; 2],
}

impl ConfusionMatrix {
    #[must_use]
    pub const fn new(cells: [[u64; 2]; 2]) -> Self {
        Self { cells }
    }

    /// Read the matrix row-major from a loaded table.
    ///
    /// The required columns are checked for existence only; cell meaning follows
    /// [`ROW_LABELS`] and [`COLUMN_LABELS`].
    ///
    /// # Errors
    /// Returns `MissingColumns` if a required column is absent, `InvalidConfusionShape`
    /// unless the table is exactly 2x2, and `InvalidCell` for a cell that is not a
    /// non-negative integer.
    pub fn from_table(table: &Table, artifact: &str) -> Result<Self> {
        let missing = table.missing_columns(&REQUIRED_COLUMNS);
        if !missing.is_empty() {
            return Err(ReportError::MissingColumns {
                artifact: artifact.to_string(),
                columns: missing,
            });
        }

        if table.len() != 2 || table.columns().len() != 2 {
            return Err(ReportError::InvalidConfusionShape {
                rows: table.len(),
                columns: table.columns().len(),
            });
        }

        let mut cells = [[0u64; 2]; 2];
        for (r, row) in table.rows().iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                cells[r][c] = value
                    .as_i64()
                    .and_then(|v| u64::try_from(v).ok())
                    .ok_or_else(|| ReportError::InvalidCell {
                        row: r,
                        column: c,
                        reason: format!("expected a non-negative integer, got '{value}'"),
                    })?;
            }
        }

        Ok(Self { cells })
    }

    #[must_use]
    pub const fn cells(&self) -> [[u64; 2]; 2] {
        self.cells
    }

    /// Count for `actual` row and `predicted` column.
    ///
    /// # Panics
    /// Panics if either index is greater than 1.
    #[must_use]
    pub const fn get(&self, actual: usize, predicted: usize) -> u64 {
        self.cells[actual][predicted]
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.cells.iter().flatten().copied().min().unwrap_or(0)
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

#[cfg(test)]
#[path = "confusion_tests.rs"]
mod tests;
