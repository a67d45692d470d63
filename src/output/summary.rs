//! Structural summary of one loaded artifact, as printed by `inspect`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::artifact::{LoadedTable, SkippedRow, Table, Value};

/// Dominant cell type of a column, ignoring empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
    Mixed,
    Empty,
}

impl ColumnKind {
    fn of<'a>(values: impl Iterator<Item = &'a Value>) -> Self {
        values.fold(Self::Empty, |kind, value| {
            let cell = match value {
                Value::Integer { .. } => Self::Integer,
                Value::Float { .. } => Self::Float,
                Value::Text(_) => Self::Text,
                Value::Empty => return kind,
            };
            match (kind, cell) {
                (Self::Empty, cell) => cell,
                (a, b) if a == b => a,
                (Self::Integer, Self::Float) | (Self::Float, Self::Integer) => Self::Float,
                _ => Self::Mixed,
            }
        })
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Mixed => "mixed",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub path: PathBuf,
    pub columns: Vec<ColumnSummary>,
    pub row_count: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ArtifactSummary {
    #[must_use]
    pub fn from_loaded(path: &Path, loaded: &LoadedTable) -> Self {
        Self {
            path: path.to_path_buf(),
            columns: summarize_columns(&loaded.table),
            row_count: loaded.table.len(),
            skipped: loaded.skipped.clone(),
        }
    }
}

fn summarize_columns(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnSummary {
            name: name.clone(),
            kind: ColumnKind::of(table.rows().iter().filter_map(|row| row.get(index))),
        })
        .collect()
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
