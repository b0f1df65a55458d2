// Rust guideline compliant 2026-02-06

//! Implementation of the `hookpin hooks` command.
//!
//! Lists every hook with the repository and revision it is pinned to.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use hookpin_core::LoadOptions;
use std::path::Path;

/// Lists hooks declared in a configuration document.
///
/// With `id`, prints only that hook and fails if it is not declared.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or `id` is not found.
pub fn execute(
    path: &Path,
    id: Option<String>,
    options: &LoadOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut config = hookpin_core::load_with(path, options)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(id) = id {
        let (source, hook) = config
            .find_hook(&id)
            .map(|(s, h)| (s.clone(), h.clone()))
            .ok_or_else(|| anyhow::anyhow!("Hook '{}' not found in {}", id, path.display()))?;
        config.sources = vec![hookpin_core::HookSource {
            hooks: vec![hook],
            ..source
        }];
    }

    println!("{}", formatter.format_hooks(&config));
    Ok(())
}
