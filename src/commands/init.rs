use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{ReportError, Result};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ReportError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# sentiment-report configuration file
# Every key is optional; the values below are the defaults.

[artifacts]
# Directory holding the artifacts (default: current directory).
# Overridden by `render --artifacts <DIR>`.
# dir = "artifacts"

preprocessing = "Hasil_Preprocessing_Data.csv"
labeling = "HasilLabeling.csv"
confusion_table = "confusion_matrix.csv"
confusion_image = "confusion_matrix.png"
classification_report = "classification_report.txt"
metrics = "average_scores.csv"

[columns]
# Columns shown by the "Raw Data and Clean Data" table, in order.
preprocessing = [
    "full_text",
    "cleasing",
    "case_folding",
    "tokenize",
    "Filtering/stopwords removal",
    "stemming_data",
]
# Columns shown by the "Labeled Dataset" table, in order.
labeling = ["stemming_data", "sentiment"]
# Category column counted by the pie and bar charts.
sentiment = "sentiment"
# Metric name and score columns of the k-fold artifact.
# Scores must be fractions in [0, 1]; they are shown as percent.
metric = "Metric"
score = "Score"

[charts]
# Height of the percent labels above the metric bars, in axis units.
annotation_offset = 0.3
# Rotation of the metric names under the bars, in degrees.
label_rotation = 45.0
# Angle of the first pie wedge, counter-clockwise from 3 o'clock.
pie_start_angle = 10.0

[charts.metric_axis]
# Fixed y window of the metric bar chart, in percent.
min = 70.0
max = 80.0
step = 1.0

[pages]
# Pages rendered when `render` gets no --page: random-forest, metrics, k-fold.
default = ["random-forest", "metrics", "k-fold"]
# "heatmap" draws the confusion table; "image" embeds the confusion image.
confusion_display = "heatmap"

[table]
# Rows shown per table panel (default: all rows).
# max_rows = 100
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
