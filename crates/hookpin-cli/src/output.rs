// Rust guideline compliant 2026-02-06

//! Output formatting module for the Hookpin CLI.
//!
//! This module provides functionality for formatting configuration documents
//! in various output formats (JSON, table, plain text).

use hookpin_core::{OutputFormat, RootConfig};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Document path as given.
    pub path: String,
    /// Number of sources, when valid.
    pub sources: usize,
    /// Number of hooks, when valid.
    pub hooks: usize,
    /// Load error, when invalid.
    pub error: Option<String>,
}

impl FileReport {
    /// Whether the document loaded cleanly.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting configuration data in different output formats.
pub trait OutputFormatter {
    /// Formats a whole configuration document.
    fn format_config(&self, config: &RootConfig) -> String;

    /// Formats the flat list of hooks with their sources.
    fn format_hooks(&self, config: &RootConfig) -> String;

    /// Formats validation outcomes for one or more documents.
    fn format_reports(&self, reports: &[FileReport]) -> String;
}

/// JSON output formatter.
///
/// Formats documents as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_config(&self, config: &RootConfig) -> String {
        serde_json::to_string_pretty(config)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize config" }).to_string())
    }

    fn format_hooks(&self, config: &RootConfig) -> String {
        let hooks: Vec<_> = config
            .hooks()
            .map(|(source, hook)| {
                json!({
                    "id": hook.id,
                    "repo": source.repository_url,
                    "rev": source.revision,
                    "args": hook.arguments,
                })
            })
            .collect();
        let output = json!({
            "hooks": hooks,
            "total": hooks.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize hooks" }).to_string())
    }

    fn format_reports(&self, reports: &[FileReport]) -> String {
        let files: Vec<_> = reports
            .iter()
            .map(|r| {
                json!({
                    "path": r.path,
                    "valid": r.is_valid(),
                    "sources": r.sources,
                    "hooks": r.hooks,
                    "error": r.error,
                })
            })
            .collect();
        let output = json!({
            "files": files,
            "valid": reports.iter().all(FileReport::is_valid),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_config(&self, config: &RootConfig) -> String {
        if config.sources.is_empty() {
            return "No repos configured.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Repo", "Rev", "Hook", "Args"]);

        for source in &config.sources {
            if source.hooks.is_empty() {
                builder.push_record(vec![
                    source.repository_url.as_str(),
                    source.revision.as_str(),
                    "-",
                    "",
                ]);
            }
            for hook in &source.hooks {
                builder.push_record(vec![
                    source.repository_url.clone(),
                    source.revision.clone(),
                    hook.id.clone(),
                    hook.arguments.join(" "),
                ]);
            }
        }

        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = table.to_string();
        if !config.default_stages.is_empty() {
            output.push_str(&format!(
                "\nDefault stages: {}",
                config.default_stages.join(", ")
            ));
        }
        output
    }

    fn format_hooks(&self, config: &RootConfig) -> String {
        if config.hook_count() == 0 {
            return "No hooks configured.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Hook", "Repo", "Rev"]);
        for (source, hook) in config.hooks() {
            builder.push_record(vec![
                hook.id.as_str(),
                source.repository_url.as_str(),
                source.revision.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_reports(&self, reports: &[FileReport]) -> String {
        let mut output = String::new();
        for report in reports {
            match &report.error {
                None => output.push_str(&format!(
                    "ok    {} ({} repos, {} hooks)\n",
                    report.path, report.sources, report.hooks
                )),
                Some(err) => output.push_str(&format!("FAIL  {}: {}\n", report.path, err)),
            }
        }
        output
    }
}

/// Plain text output formatter.
///
/// Emits documents as YAML and lists as one line per item.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_config(&self, config: &RootConfig) -> String {
        hookpin_core::to_yaml(config).unwrap_or_else(|e| format!("Error: {}", e))
    }

    fn format_hooks(&self, config: &RootConfig) -> String {
        let mut output = String::new();
        for (source, hook) in config.hooks() {
            output.push_str(&format!(
                "{} {}@{}\n",
                hook.id, source.repository_url, source.revision
            ));
        }
        output
    }

    fn format_reports(&self, reports: &[FileReport]) -> String {
        let mut output = String::new();
        for report in reports {
            let status = if report.is_valid() { "ok" } else { "invalid" };
            output.push_str(&format!("{} {}\n", report.path, status));
        }
        output
    }
}

/// Factory function to create an appropriate formatter.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
