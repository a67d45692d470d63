use crate::artifact::ArtifactLoader;
use crate::cli::{Cli, InspectArgs};
use crate::error::Result;
use crate::output::{ArtifactSummary, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load one artifact and format its summary.
///
/// # Errors
/// Returns an error if the artifact cannot be loaded or lacks any `--columns` entry.
pub fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> Result<String> {
    let expected: Vec<&str> = args
        .columns
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    let expected = (!expected.is_empty()).then_some(expected.as_slice());

    let loaded = ArtifactLoader::new().load(&args.file, expected)?;
    let summary = ArtifactSummary::from_loaded(&args.file, &loaded);
    args.format
        .formatter(color_choice_to_mode(cli.color))
        .format(&summary)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
