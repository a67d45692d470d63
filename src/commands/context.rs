//! Setup shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, ReportConfig};
use crate::error::{ReportError, Result};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration: explicit path, then discovery, unless disabled.
///
/// # Errors
/// Returns an error if the chosen file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<ReportConfig> {
    if no_config {
        return Ok(ReportConfig::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "Using configuration");
    }
    Ok(loaded.config)
}

/// Artifacts directory: `--artifacts`, then `artifacts.dir`, then the current directory.
///
/// The current directory is the empty path so artifact names stay relative in messages.
///
/// # Errors
/// Returns an error if an explicitly chosen directory does not exist.
pub fn resolve_artifacts_dir(cli_dir: Option<&Path>, config: &ReportConfig) -> Result<PathBuf> {
    let Some(dir) = cli_dir.or(config.artifacts.dir.as_deref()) else {
        return Ok(PathBuf::new());
    };
    if !dir.is_dir() {
        return Err(ReportError::Config(format!(
            "Artifacts directory not found: {}",
            dir.display()
        )));
    }
    Ok(dir.to_path_buf())
}

/// Write to `output_path`, or stdout when unset.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    match output_path {
        Some(path) => fs::write(path, content)?,
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
