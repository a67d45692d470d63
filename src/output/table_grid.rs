//! HTML grid for tabular artifacts.
//!
//! Columns appear in table order and values are shown untransformed.

use std::fmt::Write;

use super::svg::html_escape;
use crate::artifact::Table;

#[derive(Debug, Clone, Copy)]
pub struct TableGrid<'a> {
    table: &'a Table,
    max_rows: Option<usize>,
}

impl<'a> TableGrid<'a> {
    #[must_use]
    pub const fn new(table: &'a Table) -> Self {
        Self {
            table,
            max_rows: None,
        }
    }

    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Number of data rows the grid will show.
    #[must_use]
    pub fn shown_rows(&self) -> usize {
        self.max_rows
            .map_or(self.table.len(), |max| max.min(self.table.len()))
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.shown_rows() < self.table.len()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("<div class=\"table-container\">\n");
        output.push_str("<table class=\"data-table\">\n");
        output.push_str("    <thead>\n        <tr>\n");
        for column in self.table.columns() {
            let _ = writeln!(output, "            <th>{}</th>", html_escape(column));
        }
        output.push_str("        </tr>\n    </thead>\n");

        output.push_str("    <tbody>\n");
        for row in self.table.rows().iter().take(self.shown_rows()) {
            output.push_str("        <tr>\n");
            for value in row {
                let class = if value.is_numeric() {
                    " class=\"number\""
                } else {
                    ""
                };
                let _ = writeln!(
                    output,
                    "            <td{class}>{}</td>",
                    html_escape(&value.to_string())
                );
            }
            output.push_str("        </tr>\n");
        }
        output.push_str("    </tbody>\n");
        output.push_str("</table>\n");
        output.push_str("</div>\n");

        if self.table.is_empty() {
            output.push_str("<p class=\"no-results\">No rows to display.</p>\n");
        } else if self.is_truncated() {
            let _ = writeln!(
                output,
                "<p class=\"table-note\">Showing {} of {} rows</p>",
                self.shown_rows(),
                self.table.len()
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "table_grid_tests.rs"]
mod tests;
