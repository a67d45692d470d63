use crate::error::Result;

use super::{ArtifactSummary, OutputFormatter};

/// Pretty-printed JSON summary for scripts.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &ArtifactSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
