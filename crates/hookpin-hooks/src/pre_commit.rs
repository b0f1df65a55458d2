// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Refuses the commit when the repository's hook configuration document does
//! not load cleanly.

use anyhow::{Context, Result};
use hookpin_core::Settings;
use std::path::Path;

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path to the Git repository
///
/// # Returns
///
/// Ok if the document is absent or valid, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - Settings are invalid
/// - The document is not well-formed
/// - A source or hook fails validation
pub fn pre_commit_hook(repo_path: &Path) -> Result<()> {
    let settings = Settings::load(repo_path).context("Failed to load hookpin settings")?;
    let config_path = settings.config_path(repo_path);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no hook configuration, skipping");
        return Ok(());
    }

    let config = hookpin_core::load_with(&config_path, &settings.load_options())
        .with_context(|| format!("Invalid hook configuration {}", config_path.display()))?;

    tracing::info!(
        sources = config.sources.len(),
        hooks = config.hook_count(),
        "hook configuration is valid"
    );
    Ok(())
}
