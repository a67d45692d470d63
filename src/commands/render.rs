use crate::cli::{Cli, RenderArgs};
use crate::error::Result;
use crate::output::{ErrorOutput, HtmlFormatter, ReportFormatter};
use crate::report::ReportComposer;
use crate::{EXIT_CONFIG_ERROR, EXIT_PANEL_FAILURE, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, resolve_artifacts_dir, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the selected pages and write the document.
///
/// Panel failures are part of the document, not errors. They only change the
/// exit code under `--strict`.
///
/// # Errors
/// Returns an error if the configuration is invalid, the artifacts directory is
/// missing, or the document cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let artifacts_dir = resolve_artifacts_dir(args.artifacts.as_deref(), &config)?;

    let report = ReportComposer::new(config, artifacts_dir).compose(&args.pages);
    let document = HtmlFormatter::new().format(&report)?;
    write_output(args.output.as_deref(), &document)?;

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), pages = report.pages.len(), "Wrote report");
    }

    let failed = report.failed_panels();
    if failed.is_empty() {
        return Ok(EXIT_SUCCESS);
    }

    if !cli.quiet {
        let titles: Vec<&str> = failed.iter().map(|p| p.title.as_str()).collect();
        let noun = if failed.len() == 1 { "panel" } else { "panels" };
        ErrorOutput::new(color_choice_to_mode(cli.color)).print_warning(
            &format!("{} {noun} failed to render", failed.len()),
            Some(&titles.join(", ")),
        );
    }

    Ok(if args.strict {
        EXIT_PANEL_FAILURE
    } else {
        EXIT_SUCCESS
    })
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
