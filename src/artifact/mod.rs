//! Artifact ingestion: the table model, the CSV loader, and the typed
//! confusion-matrix and metric artifacts built on top of it.

mod confusion;
mod loader;
mod metrics;
mod table;
mod value;

pub use confusion::{
    ACTUAL_NEGATIVE, COLUMN_LABELS, ConfusionMatrix, PREDICTED_NEGATIVE, REQUIRED_COLUMNS,
    ROW_LABELS,
};
pub use loader::{
    ArtifactLoader, LoadedTable, SkipReason, SkippedRow,
};
pub use metrics::{METRIC_COLUMN, MetricScore, MetricScores, SCORE_COLUMN};
pub use table::Table;
pub use value::Value;
