//! In-memory tabular artifact.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::Value;
use crate::error::{ReportError, Result};

/// Ordered rows sharing one header.
///
/// Every row has exactly `columns().len()` cells; construction rejects ragged rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table, disambiguating repeated header names.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: dedupe_columns(columns),
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and complete rows (for testing).
    ///
    /// # Errors
    /// Returns an error if any row's width differs from the header.
    #[cfg(test)]
    pub(crate) fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns an error if the row's width differs from the header.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ReportError::InvalidCell {
                row: self.rows.len(),
                column: row.len().min(self.columns.len()),
                reason: format!(
                    "row has {} cells, header has {}",
                    row.len(),
                    self.columns.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `expected` that the header lacks, in the order given.
    #[must_use]
    pub fn missing_columns<S: AsRef<str>>(&self, expected: &[S]) -> Vec<String> {
        expected
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.has_column(name))
            .map(str::to_string)
            .collect()
    }

    /// Values of one column, top to bottom.
    ///
    /// # Errors
    /// Returns `UnknownColumns` if the column does not exist.
    pub fn column_values(&self, name: &str) -> Result<Vec<&Value>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// A row viewed as an ordered column → value mapping.
    #[must_use]
    pub fn row_map(&self, row: usize) -> Option<IndexMap<&str, &Value>> {
        let cells = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(cells.iter())
                .collect(),
        )
    }

    pub(crate) fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReportError::UnknownColumns {
                columns: vec![name.to_string()],
            })
    }

    /// Build a table from already-deduplicated parts without re-checking widths.
    pub(crate) const fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }
}

/// Suffix repeated header names with `.1`, `.2`, ... in order of appearance.
fn dedupe_columns(columns: Vec<String>) -> Vec<String> {
    let mut seen: IndexMap<String, usize> = IndexMap::new();
    let mut out = Vec::with_capacity(columns.len());
    for name in columns {
        let count = seen.entry(name.clone()).or_insert(0);
        if *count == 0 {
            out.push(name);
        } else {
            out.push(format!("{name}.{count}"));
        }
        *count += 1;
    }
    out
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
