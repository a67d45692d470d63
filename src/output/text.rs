use std::fmt::Write;

use crate::error::Result;

use super::{ArtifactSummary, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text artifact summary for terminals.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_skipped(&self, output: &mut String, summary: &ArtifactSummary) {
        let count = summary.skipped.len();
        let noun = if count == 1 { "row" } else { "rows" };
        let _ = writeln!(
            output,
            "{}",
            self.paint(&format!("Skipped {count} malformed {noun}:"), ansi::YELLOW)
        );
        for row in &summary.skipped {
            match row.line {
                Some(line) => {
                    let _ = writeln!(output, "  line {line}: {}", row.reason);
                }
                None => {
                    let _ = writeln!(output, "  {}", row.reason);
                }
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &ArtifactSummary) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{}",
            self.paint(&summary.path.display().to_string(), ansi::BOLD)
        );
        let _ = writeln!(output, "Rows: {}", summary.row_count);
        let _ = writeln!(output, "Columns ({}):", summary.columns.len());

        let width = summary
            .columns
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);
        for column in &summary.columns {
            let kind = self.paint(&column.kind.to_string(), ansi::DIM);
            let _ = writeln!(output, "  {:<width$}  {kind}", column.name);
        }

        if !summary.skipped.is_empty() {
            self.write_skipped(&mut output, summary);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
