// Rust guideline compliant 2026-02-06

//! Implementation of the `hookpin sample-config` command.

use anyhow::Result;
use hookpin_core::RootConfig;
use std::path::Path;

/// Prints the sample document, or writes it to `output` when given.
///
/// # Errors
///
/// Returns an error if serialization fails, or if `output` already exists
/// and `force` is not set.
pub fn execute(output: Option<&Path>, force: bool) -> Result<()> {
    let config = RootConfig::sample();
    match output {
        Some(path) => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                );
            }
            hookpin_core::save(&config, path)?;
            println!("Wrote sample configuration to {}", path.display());
        }
        None => print!("{}", hookpin_core::to_yaml(&config)?),
    }
    Ok(())
}
