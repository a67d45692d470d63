//! Best-effort CSV ingestion.
//!
//! Malformed data rows are skipped and recorded, never fatal. Only an unreadable
//! file, a missing or undecodable header, or missing expected columns abort a load.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use serde::Serialize;

use super::table::Table;
use super::value::Value;
use crate::error::{ReportError, Result};

/// Field delimiter used by every upstream artifact.
const DELIMITER: u8 = b',';

/// Why a data row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    FieldCount { expected: usize, found: usize },
    InvalidUtf8 { field: usize },
    Malformed { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::InvalidUtf8 { field } => write!(f, "field {field} is not valid UTF-8"),
            Self::Malformed { message } => f.write_str(message),
        }
    }
}

/// A dropped data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source, when known
    pub line: Option<u64>,
    pub reason: SkipReason,
}

/// Result of a successful load: the table plus the rows that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub table: Table,
    pub skipped: Vec<SkippedRow>,
}

impl LoadedTable {
    #[must_use]
    pub const fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// CSV artifact loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactLoader;

impl ArtifactLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load an artifact from disk, optionally requiring columns.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, has no header, or lacks
    /// any of `expected_columns`.
    pub fn load(&self, path: &Path, expected_columns: Option<&[&str]>) -> Result<LoadedTable> {
        let file = File::open(path).map_err(|source| ReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        self.load_reader(file, &name, expected_columns)
    }

    /// Load an artifact from any reader. `artifact` names the source in errors and logs.
    ///
    /// # Errors
    /// Same as [`ArtifactLoader::load`].
    pub fn load_reader<R: Read>(
        &self,
        reader: R,
        artifact: &str,
        expected_columns: Option<&[&str]>,
    ) -> Result<LoadedTable> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = read_header(&mut rdr, artifact)?;
        let mut table = Table::new(columns);

        if let Some(expected) = expected_columns {
            let missing = table.missing_columns(expected);
            if !missing.is_empty() {
                return Err(ReportError::MissingColumns {
                    artifact: artifact.to_string(),
                    columns: missing,
                });
            }
        }

        let width = table.columns().len();
        let mut skipped = Vec::new();
        let mut record = ByteRecord::new();

        loop {
            match rdr.read_byte_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    let line = record.position().map(csv::Position::line);
                    match decode_record(&record, width) {
                        Ok(row) => table.push_row(row)?,
                        Err(reason) => {
                            tracing::warn!(artifact, line, %reason, "skipping malformed row");
                            skipped.push(SkippedRow { line, reason });
                        }
                    }
                }
                Err(err) if err.is_io_error() => return Err(ReportError::Csv(err)),
                Err(err) => {
                    let line = err.position().map(csv::Position::line);
                    let reason = SkipReason::Malformed {
                        message: err.to_string(),
                    };
                    tracing::warn!(artifact, line, %reason, "skipping malformed row");
                    skipped.push(SkippedRow { line, reason });
                }
            }
        }

        tracing::debug!(
            artifact,
            columns = width,
            rows = table.len(),
            skipped = skipped.len(),
            "loaded artifact"
        );

        Ok(LoadedTable { table, skipped })
    }
}

fn read_header<R: Read>(rdr: &mut csv::Reader<R>, artifact: &str) -> Result<Vec<String>> {
    let header = rdr.byte_headers()?.clone();
    if header.is_empty() || (header.len() == 1 && header[0].is_empty()) {
        return Err(ReportError::EmptyArtifact {
            artifact: artifact.to_string(),
        });
    }

    header
        .iter()
        .map(|field| {
            std::str::from_utf8(field)
                .map(|s| s.trim_start_matches('\u{feff}').to_string())
                .map_err(|_| ReportError::InvalidHeader {
                    artifact: artifact.to_string(),
                })
        })
        .collect()
}

fn decode_record(record: &ByteRecord, width: usize) -> std::result::Result<Vec<Value>, SkipReason> {
    if record.len() != width {
        return Err(SkipReason::FieldCount {
            expected: width,
            found: record.len(),
        });
    }

    record
        .iter()
        .enumerate()
        .map(|(field, bytes)| {
            std::str::from_utf8(bytes)
                .map(Value::parse)
                .map_err(|_| SkipReason::InvalidUtf8 { field })
        })
        .collect()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
