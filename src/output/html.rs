use std::fmt::Write;

use crate::error::Result;
use crate::report::{RenderedPage, RenderedSection, Report};

use super::html_template::{HTML_FOOTER, HTML_HEAD_START, HTML_STYLE};
use super::svg::html_escape;
use super::{PanelOutcome, RenderedPanel, ReportFormatter};

/// Renders a composed report as one standalone HTML document.
///
/// Page links are written under the title only when more than one page is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_header(output: &mut String, title: &str) {
        output.push_str(HTML_HEAD_START);
        let _ = writeln!(output, "    <title>{}</title>", html_escape(title));
        output.push_str(HTML_STYLE);
        let _ = writeln!(output, "        <h1>{}</h1>", html_escape(title));
    }

    fn write_nav(output: &mut String, pages: &[RenderedPage]) {
        output.push_str("        <nav class=\"page-nav\">\n");
        for page in pages {
            let _ = writeln!(
                output,
                r##"            <a href="#{}">{}</a>"##,
                page.page.slug(),
                html_escape(page.page.title())
            );
        }
        output.push_str("        </nav>\n");
    }

    fn write_page(output: &mut String, page: &RenderedPage) {
        let _ = writeln!(
            output,
            r#"        <section class="page" id="{}">"#,
            page.page.slug()
        );
        let _ = writeln!(output, "            <h2>{}</h2>", html_escape(page.page.title()));

        for section in &page.sections {
            match section {
                RenderedSection::Narrative { heading, text } => {
                    Self::write_narrative(output, heading.as_deref(), text);
                }
                RenderedSection::Panel(panel) => Self::write_panel(output, panel),
            }
        }

        output.push_str("        </section>\n");
    }

    fn write_narrative(output: &mut String, heading: Option<&str>, text: &str) {
        output.push_str("            <div class=\"narrative\">\n");
        if let Some(heading) = heading {
            let _ = writeln!(output, "                <h3>{}</h3>", html_escape(heading));
        }
        for paragraph in text.split("\n\n").filter(|p| !p.trim().is_empty()) {
            let _ = writeln!(output, "                <p>{}</p>", render_markup(paragraph.trim()));
        }
        output.push_str("            </div>\n");
    }

    fn write_panel(output: &mut String, panel: &RenderedPanel) {
        output.push_str("            <div class=\"panel\">\n");
        let _ = writeln!(output, "                <h3>{}</h3>", html_escape(&panel.title));

        match &panel.outcome {
            PanelOutcome::Rendered { html, notes } => {
                for line in html.lines() {
                    let _ = writeln!(output, "                {line}");
                }
                for note in notes {
                    let _ = writeln!(
                        output,
                        r#"                <p class="panel-note">{}</p>"#,
                        html_escape(note)
                    );
                }
            }
            PanelOutcome::Failed {
                error_type,
                message,
            } => {
                let _ = writeln!(
                    output,
                    r#"                <div class="panel-error" role="alert"><strong>{}:</strong> {}</div>"#,
                    html_escape(error_type),
                    html_escape(message)
                );
            }
        }

        output.push_str("            </div>\n");
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        Self::write_header(&mut output, &report.title);
        if report.pages.len() > 1 {
            Self::write_nav(&mut output, &report.pages);
        }

        if report.pages.is_empty() {
            output.push_str("        <p class=\"no-results\">No pages selected.</p>\n");
        }
        for page in &report.pages {
            Self::write_page(&mut output, page);
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

/// Escape `text` and turn `**span**` pairs into `<strong>`. An unpaired marker stays literal.
fn render_markup(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();
    let paired = parts.len() % 2 == 1;
    let mut output = String::with_capacity(text.len());

    for (i, part) in parts.iter().enumerate() {
        let escaped = html_escape(part);
        if i % 2 == 0 {
            output.push_str(&escaped);
        } else if paired || i + 1 < parts.len() {
            let _ = write!(output, "<strong>{escaped}</strong>");
        } else {
            output.push_str("**");
            output.push_str(&escaped);
        }
    }
    output
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
