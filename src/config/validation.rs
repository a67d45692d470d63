//! Configuration semantic validation.
//!
//! Runs after parsing: range checks and cross-field constraints that serde cannot express.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::output::svg::{MAX_AXIS_TICKS, axis_intervals};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `Config` if the metric axis window is empty or not finite, its step is not
/// positive or yields too many ticks, a chart constant is not finite, a column name is blank, or `table.max_rows` is 0.
pub fn validate_config(config: &ReportConfig) -> Result<()> {
    validate_charts(config)?;
    validate_columns(config)?;
    validate_table(config)?;
    Ok(())
}

fn validate_charts(config: &ReportConfig) -> Result<()> {
    let axis = &config.charts.metric_axis;
    if !axis.min.is_finite() || !axis.max.is_finite() || !axis.step.is_finite() {
        return Err(ReportError::Config(
            "charts.metric_axis values must be finite numbers".to_string(),
        ));
    }
    if axis.min >= axis.max {
        return Err(ReportError::Config(format!(
            "charts.metric_axis.min ({}) must be less than charts.metric_axis.max ({})",
            axis.min, axis.max
        )));
    }
    if axis.step <= 0.0 {
        return Err(ReportError::Config(format!(
            "charts.metric_axis.step must be greater than 0, got {}",
            axis.step
        )));
    }
    if axis_intervals(axis.min, axis.max, axis.step).is_none() {
        return Err(ReportError::Config(format!(
            "charts.metric_axis.step ({}) gives more than {MAX_AXIS_TICKS} ticks between {} and {}",
            axis.step, axis.min, axis.max
        )));
    }

    for (name, value) in [
        ("charts.annotation_offset", config.charts.annotation_offset),
        ("charts.label_rotation", config.charts.label_rotation),
        ("charts.pie_start_angle", config.charts.pie_start_angle),
    ] {
        if !value.is_finite() {
            return Err(ReportError::Config(format!("{name} must be a finite number")));
        }
    }
    Ok(())
}

fn validate_columns(config: &ReportConfig) -> Result<()> {
    let columns = &config.columns;
    let named = [
        ("columns.sentiment", &columns.sentiment),
        ("columns.metric", &columns.metric),
        ("columns.score", &columns.score),
    ];
    for (name, value) in named {
        if value.trim().is_empty() {
            return Err(ReportError::Config(format!("{name} must not be empty")));
        }
    }

    for (name, list) in [
        ("columns.preprocessing", &columns.preprocessing),
        ("columns.labeling", &columns.labeling),
    ] {
        if let Some(i) = list.iter().position(|c| c.trim().is_empty()) {
            return Err(ReportError::Config(format!(
                "{name}[{i}] must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_table(config: &ReportConfig) -> Result<()> {
    if config.table.max_rows == Some(0) {
        return Err(ReportError::Config(
            "table.max_rows must be at least 1 (omit it to show every row)".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
