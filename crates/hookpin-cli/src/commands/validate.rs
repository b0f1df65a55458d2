// Rust guideline compliant 2026-02-06

//! Implementation of the `hookpin validate` command.
//!
//! Loads each document, reports the outcome per file, and fails if any is invalid.

use crate::output::FileReport;
use crate::OutputFormatter;
use anyhow::Result;
use hookpin_core::LoadOptions;
use std::path::PathBuf;

/// Validates one or more configuration documents.
///
/// Every file is checked even after a failure, so one run reports all problems.
///
/// # Errors
///
/// Returns an error if at least one document fails to load.
pub fn execute(
    files: Vec<PathBuf>,
    options: &LoadOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let reports = check_all(&files, options);
    print!("{}", formatter.format_reports(&reports));

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} configuration file(s) invalid", failed, reports.len());
    }
    Ok(())
}

/// Loads each file and collects a report per file.
pub fn check_all(files: &[PathBuf], options: &LoadOptions) -> Vec<FileReport> {
    files
        .iter()
        .map(|path| {
            let display = path.display().to_string();
            match hookpin_core::load_with(path, options) {
                Ok(config) => FileReport {
                    path: display,
                    sources: config.sources.len(),
                    hooks: config.hook_count(),
                    error: None,
                },
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "validation failed");
                    FileReport {
                        path: display,
                        sources: 0,
                        hooks: 0,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}
