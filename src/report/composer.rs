use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Serialize;

use super::Page;
use super::layout::{REPORT_TITLE, Section, page_layout};
use crate::config::ReportConfig;
use crate::output::{ChartSettings, PanelRenderer, RenderedPanel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedSection {
    Narrative {
        heading: Option<String>,
        text: String,
    },
    Panel(RenderedPanel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub page: Page,
    pub sections: Vec<RenderedSection>,
}

impl RenderedPage {
    pub fn panels(&self) -> impl Iterator<Item = &RenderedPanel> {
        self.sections.iter().filter_map(|s| match s {
            RenderedSection::Panel(panel) => Some(panel),
            RenderedSection::Narrative { .. } => None,
        })
    }
}

/// A composed report, ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub pages: Vec<RenderedPage>,
}

impl Report {
    pub fn panels(&self) -> impl Iterator<Item = &RenderedPanel> {
        self.pages.iter().flat_map(RenderedPage::panels)
    }

    #[must_use]
    pub fn failed_panels(&self) -> Vec<&RenderedPanel> {
        self.panels().filter(|p| p.is_failed()).collect()
    }
}

/// Turns page selections into rendered pages. Artifacts are read fresh on every call.
#[derive(Debug)]
pub struct ReportComposer {
    config: ReportConfig,
    artifacts_dir: PathBuf,
    renderer: PanelRenderer,
}

impl ReportComposer {
    #[must_use]
    pub fn new(config: ReportConfig, artifacts_dir: PathBuf) -> Self {
        let renderer = PanelRenderer::new(ChartSettings::from_config(&config));
        Self {
            config,
            artifacts_dir,
            renderer,
        }
    }

    /// Render `pages` in order; repeats are dropped, an empty selection uses the configured default.
    #[must_use]
    pub fn compose(&self, pages: &[Page]) -> Report {
        let selection: IndexSet<Page> = if pages.is_empty() {
            self.config.pages.default.iter().copied().collect()
        } else {
            pages.iter().copied().collect()
        };

        let pages = selection
            .into_iter()
            .map(|page| self.compose_page(page))
            .collect();

        Report {
            title: REPORT_TITLE.to_string(),
            pages,
        }
    }

    fn compose_page(&self, page: Page) -> RenderedPage {
        tracing::debug!(page = page.slug(), "Composing page");
        let layout = page_layout(page, &self.config, &self.artifacts_dir);
        let sections = layout
            .sections
            .into_iter()
            .map(|section| match section {
                Section::Narrative { heading, text } => RenderedSection::Narrative { heading, text },
                Section::Panel(spec) => RenderedSection::Panel(self.renderer.render(&spec)),
            })
            .collect();
        RenderedPage { page, sections }
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
