//! Static page layouts: which panels each page shows and the text around them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Page;
use crate::config::{ConfusionDisplay, ReportConfig};
use crate::output::{ChartSpec, PanelSpec};

pub const REPORT_TITLE: &str = "Sentiment Analysis of Social Media X Users on the 2024 \
     Indonesian Presidential Election Dispute Using Random Forest";

const RANDOM_FOREST_NARRATIVE: &str = "**Random Forest** is a machine learning technique used for \
     classification and regression. It combines a large number of **decision trees** into a \
     stronger and more accurate model. Each tree in the forest votes for a class \
     (classification) or predicts a value (regression), and the class with the most votes or \
     the average value becomes the final result.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Static text. `**bold**` spans are the only markup.
    Narrative {
        heading: Option<String>,
        text: String,
    },
    Panel(PanelSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub page: Page,
    pub sections: Vec<Section>,
}

/// Artifact path from configuration, resolved against `artifacts_dir` unless absolute.
#[must_use]
pub fn resolve_artifact(artifacts_dir: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        artifacts_dir.join(configured)
    }
}

#[must_use]
pub fn page_layout(page: Page, config: &ReportConfig, artifacts_dir: &Path) -> PageLayout {
    let artifact = |p: &Path| resolve_artifact(artifacts_dir, p);
    let files = &config.artifacts;
    let columns = &config.columns;

    let sections = match page {
        Page::RandomForest => vec![
            Section::Narrative {
                heading: Some("Random Forest".to_string()),
                text: RANDOM_FOREST_NARRATIVE.to_string(),
            },
            Section::Panel(PanelSpec::chart(
                "Raw Data and Clean Data",
                artifact(&files.preprocessing),
                ChartSpec::Table {
                    columns: Some(columns.preprocessing.clone()),
                },
            )),
            Section::Panel(PanelSpec::chart(
                "Labeled Dataset",
                artifact(&files.labeling),
                ChartSpec::Table {
                    columns: Some(columns.labeling.clone()),
                },
            )),
            Section::Panel(PanelSpec::chart(
                "Sentiment Distribution",
                artifact(&files.labeling),
                ChartSpec::Pie {
                    column: columns.sentiment.clone(),
                },
            )),
            Section::Panel(PanelSpec::chart(
                "Sentiment Count",
                artifact(&files.labeling),
                ChartSpec::Bar {
                    column: columns.sentiment.clone(),
                },
            )),
        ],
        Page::Metrics => {
            let confusion = match config.pages.confusion_display {
                ConfusionDisplay::Heatmap => PanelSpec::chart(
                    "Confusion Matrix",
                    artifact(&files.confusion_table),
                    ChartSpec::Heatmap,
                ),
                ConfusionDisplay::Image => PanelSpec::image(
                    "Confusion Matrix",
                    artifact(&files.confusion_image),
                    "Confusion Matrix",
                ),
            };
            vec![
                Section::Panel(confusion),
                Section::Panel(PanelSpec::chart(
                    "Classification Report",
                    artifact(&files.classification_report),
                    ChartSpec::Table { columns: None },
                )),
            ]
        }
        Page::KFold => vec![
            Section::Panel(PanelSpec::chart(
                "K-Fold Cross Validation Results",
                artifact(&files.metrics),
                ChartSpec::Table { columns: None },
            )),
            Section::Panel(PanelSpec::chart(
                "Average Evaluation Metrics",
                artifact(&files.metrics),
                ChartSpec::MetricBar {
                    metric_column: columns.metric.clone(),
                    score_column: columns.score.clone(),
                },
            )),
        ],
    };

    PageLayout { page, sections }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
