use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::artifact::{METRIC_COLUMN, SCORE_COLUMN};
use crate::output::svg::{
    DEFAULT_ANNOTATION_OFFSET, DEFAULT_AXIS_MAX, DEFAULT_AXIS_MIN, DEFAULT_AXIS_STEP,
    DEFAULT_LABEL_ROTATION, DEFAULT_START_ANGLE,
};
use crate::report::Page;

/// Root of `.sentiment-report.toml`. Every section has defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub artifacts: ArtifactsConfig,
    pub columns: ColumnsConfig,
    pub charts: ChartsConfig,
    pub pages: PagesConfig,
    pub table: TableConfig,
}

/// Artifact file names, resolved against `dir`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Base directory for relative artifact paths (default: current directory).
    pub dir: Option<PathBuf>,
    pub preprocessing: PathBuf,
    pub labeling: PathBuf,
    pub confusion_table: PathBuf,
    pub confusion_image: PathBuf,
    pub classification_report: PathBuf,
    pub metrics: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            preprocessing: PathBuf::from("Hasil_Preprocessing_Data.csv"),
            labeling: PathBuf::from("HasilLabeling.csv"),
            confusion_table: PathBuf::from("confusion_matrix.csv"),
            confusion_image: PathBuf::from("confusion_matrix.png"),
            classification_report: PathBuf::from("classification_report.txt"),
            metrics: PathBuf::from("average_scores.csv"),
        }
    }
}

/// Column selections for the table panels and the charted columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnsConfig {
    pub preprocessing: Vec<String>,
    pub labeling: Vec<String>,
    /// Category column for the pie and bar charts.
    pub sentiment: String,
    pub metric: String,
    /// Score column, fractions in [0, 1].
    pub score: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            preprocessing: [
                "full_text",
                "cleasing",
                "case_folding",
                "tokenize",
                "Filtering/stopwords removal",
                "stemming_data",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            labeling: vec!["stemming_data".to_string(), "sentiment".to_string()],
            sentiment: "sentiment".to_string(),
            metric: METRIC_COLUMN.to_string(),
            score: SCORE_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartsConfig {
    pub metric_axis: MetricAxisConfig,
    /// Metric annotation height above the bar top, in axis units.
    pub annotation_offset: f64,
    /// Metric tick label rotation in degrees.
    pub label_rotation: f64,
    /// Pie start angle in degrees, counter-clockwise from 3 o'clock.
    pub pie_start_angle: f64,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            metric_axis: MetricAxisConfig::default(),
            annotation_offset: DEFAULT_ANNOTATION_OFFSET,
            label_rotation: DEFAULT_LABEL_ROTATION,
            pie_start_angle: DEFAULT_START_ANGLE,
        }
    }
}

/// Fixed y window of the metric bar chart, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricAxisConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for MetricAxisConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_AXIS_MIN,
            max: DEFAULT_AXIS_MAX,
            step: DEFAULT_AXIS_STEP,
        }
    }
}

/// How the metrics page shows the confusion matrix.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfusionDisplay {
    /// Heatmap rendered from the confusion table.
    #[default]
    Heatmap,
    /// The pre-rendered confusion image, embedded as is.
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesConfig {
    /// Pages rendered when none are given on the command line.
    pub default: Vec<Page>,
    pub confusion_display: ConfusionDisplay,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            default: Page::ALL.to_vec(),
            confusion_display: ConfusionDisplay::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Rows shown per table panel; all rows when unset.
    pub max_rows: Option<usize>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
