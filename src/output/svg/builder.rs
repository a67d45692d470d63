//! SVG composition builder shared by every chart.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;
use super::style::ChartColor;

/// Builder for an `<svg>` document with an accessible title.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    description: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            description: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Longer text alternative, emitted as `<desc>`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    pub fn push<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    pub fn push_svg(&mut self, svg: impl Into<String>) {
        self.elements.push(svg.into());
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// Centered muted message used when a chart has nothing to draw.
    #[must_use]
    pub fn empty_state(self, message: &str) -> String {
        let text_color = ChartColor::css_var("text-muted").to_css();
        let text = format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">{}</text>"#,
            self.width / 2.0,
            self.height / 2.0,
            html_escape(message)
        );
        self.push_raw(text).build()
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }
        if let Some(desc) = &self.description {
            let _ = writeln!(output, r"    <desc>{}</desc>", html_escape(desc));
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
