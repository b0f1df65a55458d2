// Rust guideline compliant 2026-02-06

//! Settings for the hookpin tools themselves.

use crate::document::LoadOptions;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default name of the hook configuration document.
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Name of the optional settings file.
pub const SETTINGS_FILE: &str = "hookpin.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Settings controlling where documents are found and how results are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Configuration document, relative to the working directory or repository root.
    #[serde(default = "default_config_file")]
    pub config_file: PathBuf,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Reject unknown keys and stage names instead of warning about them.
    #[serde(default)]
    pub strict: bool,
}

fn default_config_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            output_format: OutputFormat::default(),
            strict: false,
        }
    }
}

impl Settings {
    /// Loads settings from file and environment variables.
    ///
    /// Settings are loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. `hookpin.toml` in `dir`
    /// 3. Environment variables with `HOOKPIN_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file exists but cannot be read
    /// - The settings file contains invalid TOML
    /// - An environment variable holds an invalid value
    /// - The resulting values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut settings = Self::default();

        let path = dir.join(SETTINGS_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| crate::Error::Io {
                path: path.clone(),
                source,
            })?;
            settings = toml::from_str(&content).map_err(|e| {
                crate::Error::Settings(format!("Invalid settings file {}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "applied settings file");
        }

        settings.apply_env_overrides()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `HOOKPIN_CONFIG_FILE` - Path of the configuration document
    /// - `HOOKPIN_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `HOOKPIN_STRICT` - Strict key and stage checking (true/false)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOOKPIN_CONFIG_FILE") {
            self.config_file = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("HOOKPIN_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::Settings(
                        "HOOKPIN_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("HOOKPIN_STRICT") {
            self.strict = val.parse().map_err(|_| {
                crate::Error::Settings("HOOKPIN_STRICT must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.config_file.as_os_str().is_empty() {
            return Err(crate::Error::Settings(
                "config_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load options implied by these settings.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
        }
    }

    /// Resolves the configuration document against `root` unless it is absolute.
    pub fn config_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config_file)
    }

    /// Saves the settings to `hookpin.toml` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join(SETTINGS_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::Settings(format!("Failed to serialize settings: {}", e))
        })?;
        std::fs::write(&path, content).map_err(|source| crate::Error::Io { path, source })?;
        Ok(())
    }
}
