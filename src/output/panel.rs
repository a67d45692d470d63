//! Panel rendering: one artifact through one chart strategy.
//!
//! Errors stop at the panel boundary. A panel that fails to load, validate or draw
//! becomes a [`PanelOutcome::Failed`] and the rest of the page still renders.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use super::svg::{
    BarChart, ConfusionHeatmap, MAX_AXIS_TICKS, MetricBarChart, PieChart, SvgElement,
    axis_intervals, html_escape,
};
use super::table_grid::TableGrid;
use crate::artifact::{ArtifactLoader, ConfusionMatrix, LoadedTable, MetricScores};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::transform::{count_by_category, project};

/// What to draw from a loaded artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Grid of the named columns, in order; every column when `None`.
    Table { columns: Option<Vec<String>> },
    Pie { column: String },
    Bar { column: String },
    Heatmap,
    MetricBar {
        metric_column: String,
        score_column: String,
    },
}

impl ChartSpec {
    /// Columns the loader must find before the chart is attempted.
    fn required_columns(&self) -> Vec<&str> {
        match self {
            Self::Table { columns } => columns
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect(),
            Self::Pie { column } | Self::Bar { column } => vec![column.as_str()],
            Self::Heatmap => Vec::new(),
            Self::MetricBar {
                metric_column,
                score_column,
            } => vec![metric_column.as_str(), score_column.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    Chart { artifact: PathBuf, spec: ChartSpec },
    /// Pre-rendered image embedded as is.
    Image { path: PathBuf, caption: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSpec {
    pub title: String,
    pub content: PanelContent,
}

impl PanelSpec {
    #[must_use]
    pub fn chart(title: impl Into<String>, artifact: PathBuf, spec: ChartSpec) -> Self {
        Self {
            title: title.into(),
            content: PanelContent::Chart { artifact, spec },
        }
    }

    #[must_use]
    pub fn image(title: impl Into<String>, path: PathBuf, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: PanelContent::Image {
                path,
                caption: caption.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelOutcome {
    Rendered {
        html: String,
        /// Non-fatal remarks such as skipped rows.
        notes: Vec<String>,
    },
    Failed {
        error_type: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPanel {
    pub title: String,
    pub outcome: PanelOutcome,
}

impl RenderedPanel {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, PanelOutcome::Failed { .. })
    }
}

/// Chart constants shared by every panel of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub max_rows: Option<usize>,
    pub pie_start_angle: f64,
    pub axis_min: f64,
    pub axis_max: f64,
    pub axis_step: f64,
    pub annotation_offset: f64,
    pub label_rotation: f64,
}

impl ChartSettings {
    #[must_use]
    pub const fn from_config(config: &ReportConfig) -> Self {
        let charts = &config.charts;
        Self {
            max_rows: config.table.max_rows,
            pie_start_angle: charts.pie_start_angle,
            axis_min: charts.metric_axis.min,
            axis_max: charts.metric_axis.max,
            axis_step: charts.metric_axis.step,
            annotation_offset: charts.annotation_offset,
            label_rotation: charts.label_rotation,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

#[derive(Debug, Default)]
pub struct PanelRenderer {
    loader: ArtifactLoader,
    settings: ChartSettings,
}

impl PanelRenderer {
    #[must_use]
    pub fn new(settings: ChartSettings) -> Self {
        Self {
            loader: ArtifactLoader::new(),
            settings,
        }
    }

    /// Render one panel. Never fails; errors become a failed panel.
    #[must_use]
    pub fn render(&self, spec: &PanelSpec) -> RenderedPanel {
        let outcome = match self.try_render(&spec.content) {
            Ok((html, notes)) => {
                tracing::info!(panel = %spec.title, "Rendered panel");
                PanelOutcome::Rendered { html, notes }
            }
            Err(e) => {
                tracing::warn!(panel = %spec.title, error = %e, "Panel failed");
                PanelOutcome::Failed {
                    error_type: e.error_type(),
                    message: e.to_string(),
                }
            }
        };
        RenderedPanel {
            title: spec.title.clone(),
            outcome,
        }
    }

    fn try_render(&self, content: &PanelContent) -> Result<(String, Vec<String>)> {
        match content {
            PanelContent::Chart { artifact, spec } => {
                let required = spec.required_columns();
                let expected = (!required.is_empty()).then_some(required.as_slice());
                let loaded = self.loader.load(artifact, expected)?;
                let notes = skipped_rows_note(&loaded).into_iter().collect();
                let html = self.render_chart(artifact, spec, &loaded)?;
                Ok((html, notes))
            }
            PanelContent::Image { path, caption } => Ok((render_image(path, caption)?, Vec::new())),
        }
    }

    fn render_chart(&self, artifact: &Path, spec: &ChartSpec, loaded: &LoadedTable) -> Result<String> {
        let table = &loaded.table;
        let name = artifact.display().to_string();
        let html = match spec {
            ChartSpec::Table { columns: Some(columns) } => {
                let projected = project(table, columns)?;
                TableGrid::new(&projected)
                    .with_max_rows(self.settings.max_rows)
                    .render()
            }
            ChartSpec::Table { columns: None } => TableGrid::new(table)
                .with_max_rows(self.settings.max_rows)
                .render(),
            ChartSpec::Pie { column } => {
                let distribution = count_by_category(table, column)?;
                PieChart::from_distribution("Sentiment Distribution", &distribution)
                    .with_start_angle(self.settings.pie_start_angle)
                    .render()
            }
            ChartSpec::Bar { column } => {
                let distribution = count_by_category(table, column)?;
                BarChart::from_distribution("Sentiment Count", &distribution).render()
            }
            ChartSpec::Heatmap => {
                ConfusionHeatmap::new(ConfusionMatrix::from_table(table, &name)?).render()
            }
            ChartSpec::MetricBar {
                metric_column,
                score_column,
            } => {
                self.check_metric_window()?;
                let scores = MetricScores::from_table(table, metric_column, score_column, &name)?;
                MetricBarChart::new(
                    "Average Evaluation Metrics from K-Fold Cross-Validation (Weighted Avg, %)",
                    scores,
                )
                .with_window(
                    self.settings.axis_min,
                    self.settings.axis_max,
                    self.settings.axis_step,
                )
                .with_annotation_offset(self.settings.annotation_offset)
                .with_label_rotation(self.settings.label_rotation)
                .render()
            }
        };
        Ok(html)
    }
}

impl PanelRenderer {
    fn check_metric_window(&self) -> Result<()> {
        let settings = &self.settings;
        match axis_intervals(settings.axis_min, settings.axis_max, settings.axis_step) {
            Some(_) => Ok(()),
            None => Err(ReportError::Render(format!(
                "metric axis {}..{} step {} needs a non-empty window and at most {MAX_AXIS_TICKS} ticks",
                settings.axis_min, settings.axis_max, settings.axis_step
            ))),
        }
    }
}

fn skipped_rows_note(loaded: &LoadedTable) -> Option<String> {
    match loaded.skipped_count() {
        0 => None,
        1 => Some("1 malformed row skipped".to_string()),
        n => Some(format!("{n} malformed rows skipped")),
    }
}

fn image_mime(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => Ok("image/png"),
        Some("jpg" | "jpeg") => Ok("image/jpeg"),
        Some("gif") => Ok("image/gif"),
        Some("svg") => Ok("image/svg+xml"),
        Some("webp") => Ok("image/webp"),
        _ => Err(ReportError::Render(format!(
            "unsupported image type: {}",
            path.display()
        ))),
    }
}

/// Inline the image as a data URI so the document stays self-contained.
fn render_image(path: &Path, caption: &str) -> Result<String> {
    let mime = image_mime(path)?;
    let bytes = std::fs::read(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let caption = html_escape(caption);

    let mut output = String::new();
    output.push_str("<figure class=\"image-panel\">\n");
    let _ = writeln!(
        output,
        r#"    <img src="data:{mime};base64,{}" alt="{caption}">"#,
        STANDARD.encode(bytes)
    );
    let _ = writeln!(output, "    <figcaption>{caption}</figcaption>");
    output.push_str("</figure>\n");
    Ok(output)
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
