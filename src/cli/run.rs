//! Option resolution and the conversion run.

use std::path::PathBuf;

use anyhow::Context;

use super::{
    Cli,
    Options,
    Prompt,
};
use crate::config::{
    Settings,
    load_settings,
};
use crate::workspace::{
    ConversionReport,
    convert,
};

/// Resolves the options of a run.
///
/// Each value comes from the command line when given, otherwise from the
/// prompt (unless `--silent`), otherwise from the settings.
///
/// # Errors
/// Returns an error when prompting fails.
pub fn resolve_options(
    cli: &Cli,
    settings: &Settings,
    prompt: &mut dyn Prompt,
) -> anyhow::Result<Options> {
    let mut resolve = |flag: Option<&PathBuf>, question: &str, default: &str| {
        if let Some(value) = flag {
            return Ok(value.clone());
        }
        if cli.silent {
            return Ok(PathBuf::from(default));
        }
        prompt.ask(question, default).map(PathBuf::from).context("Failed to read the answer")
    };

    let src = resolve(
        cli.src.as_ref(),
        "path of the folder with the JSON files or to the CSV file",
        &settings.src,
    )?;
    let target = resolve(
        cli.target.as_ref(),
        "filename or path for the conversion results",
        &settings.target,
    )?;

    Ok(Options { src, target, file_pattern: settings.file_pattern.clone() })
}

/// Runs one conversion for the parsed command line.
///
/// # Errors
/// Returns configuration, prompt, and conversion failures with context.
pub fn run(cli: &Cli, prompt: &mut dyn Prompt) -> anyhow::Result<ConversionReport> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let settings = load_settings(&cwd)?;
    let options = resolve_options(cli, &settings, prompt)?;
    tracing::debug!(?options, "Resolved options");

    let report = convert(&options.src, &options.target, &options.file_pattern).with_context(|| {
        format!(
            "Failed to convert '{}' into '{}'",
            options.src.display(),
            options.target.display()
        )
    })?;

    for output in &report.outputs {
        tracing::info!("Wrote {}", output.display());
    }
    Ok(report)
}
