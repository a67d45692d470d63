use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No columns to parse from {artifact}")]
    EmptyArtifact { artifact: String },

    #[error("Header of {artifact} is not valid UTF-8")]
    InvalidHeader { artifact: String },

    #[error("Missing required column(s) in {artifact}: {}", .columns.join(", "))]
    MissingColumns {
        artifact: String,
        columns: Vec<String>,
    },

    #[error("Unknown column(s): {}", .columns.join(", "))]
    UnknownColumns { columns: Vec<String> },

    #[error("Column '{column}' row {row} holds non-numeric value '{value}'")]
    NonNumericCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Invalid cell at row {row}, column {column}: {reason}")]
    InvalidCell {
        row: usize,
        column: usize,
        reason: String,
    },

    #[error("Confusion matrix must be 2x2, got {rows}x{columns}")]
    InvalidConfusionShape { rows: usize, columns: usize },

    #[error("Score for '{metric}' is {value}, expected a fraction in [0, 1]")]
    ScoreOutOfRange { metric: String, value: f64 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Short category name used in user-facing error lines and failed panels.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::Csv(_) | Self::EmptyArtifact { .. } | Self::InvalidHeader { .. } => "Parse",
            Self::MissingColumns { .. } => "MissingColumn",
            Self::UnknownColumns { .. } => "UnknownColumn",
            Self::NonNumericCell { .. }
            | Self::InvalidCell { .. }
            | Self::InvalidConfusionShape { .. }
            | Self::ScoreOutOfRange { .. } => "InvalidData",
            Self::Render(_) => "Render",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Actionable hint printed under the error line, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingColumns { .. } => {
                Some("check the artifact header or the column names in the configuration")
            }
            Self::ScoreOutOfRange { .. } => {
                Some("scores must be fractions; the report scales them to percent itself")
            }
            Self::FileRead { .. } => Some("check the path or pass --artifacts <DIR>"),
            Self::TomlParse(_) => Some("run `sentiment-report init` to generate a valid template"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
