// Rust guideline compliant 2026-02-06

//! Implementation of the `hookpin show` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use hookpin_core::LoadOptions;
use std::path::Path;

/// Loads a configuration document and prints it in the selected format.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded.
pub fn execute(path: &Path, options: &LoadOptions, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = hookpin_core::load_with(path, options)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    println!("{}", formatter.format_config(&config));
    Ok(())
}
