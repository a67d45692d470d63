mod error_output;
mod html;
mod html_template;
mod json;
mod panel;
mod summary;
pub mod svg;
mod table_grid;
mod text;

pub use error_output::ErrorOutput;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use panel::{
    ChartSettings, ChartSpec, PanelContent, PanelOutcome, PanelRenderer, PanelSpec, RenderedPanel,
};
pub use summary::{ArtifactSummary, ColumnKind, ColumnSummary};
pub use table_grid::TableGrid;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::Report;

/// Formats an artifact summary for `inspect`.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &ArtifactSummary) -> Result<String>;
}

/// Formats a composed report into a document.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
