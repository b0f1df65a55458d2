// Rust guideline compliant 2026-02-06

//! Unit tests for output formatting module.

use hookpin_cli::create_formatter;
use hookpin_cli::output::FileReport;
use hookpin_core::{OutputFormat, RootConfig};

fn reports() -> Vec<FileReport> {
    vec![
        FileReport {
            path: "good.yaml".to_string(),
            sources: 3,
            hooks: 3,
            error: None,
        },
        FileReport {
            path: "bad.yaml".to_string(),
            sources: 0,
            hooks: 0,
            error: Some("`rev` is required".to_string()),
        },
    ]
}

#[test]
fn test_json_formatter_config() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_config(&RootConfig::sample());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["repos"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["repos"][0]["hooks"][0]["id"], "black");
    assert_eq!(value["repos"][0]["hooks"][0]["args"][1], "--line-length");
    assert_eq!(value["default_stages"][0], "commit");
}

#[test]
fn test_json_formatter_hooks() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_hooks(&RootConfig::sample());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["total"], 3);
    assert_eq!(value["hooks"][1]["id"], "flake8");
    assert_eq!(value["hooks"][1]["rev"], "4.0.1");
}

#[test]
fn test_json_formatter_reports() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_reports(&reports());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["valid"], false);
    assert_eq!(value["files"][0]["valid"], true);
    assert_eq!(value["files"][1]["error"], "`rev` is required");
}

#[test]
fn test_table_formatter_config() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_config(&RootConfig::sample());

    assert!(output.contains("Repo"));
    assert!(output.contains("https://github.com/psf/black"));
    assert!(output.contains("--preview --line-length 79"));
    assert!(output.contains("Default stages: commit"));
}

#[test]
fn test_table_formatter_empty_config() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_config(&RootConfig::default());
    assert_eq!(output, "No repos configured.");
    assert_eq!(
        formatter.format_hooks(&RootConfig::default()),
        "No hooks configured."
    );
}

#[test]
fn test_table_formatter_reports() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_reports(&reports());
    assert!(output.contains("ok    good.yaml (3 repos, 3 hooks)"));
    assert!(output.contains("FAIL  bad.yaml: `rev` is required"));
}

#[test]
fn test_plain_formatter_config_is_yaml() {
    let formatter = create_formatter(OutputFormat::Plain);
    let output = formatter.format_config(&RootConfig::sample());
    let reparsed = hookpin_core::load_str(&output, "plain", &Default::default())
        .expect("plain output should load");
    assert_eq!(reparsed, RootConfig::sample());
}

#[test]
fn test_plain_formatter_hooks() {
    let formatter = create_formatter(OutputFormat::Plain);
    let output = formatter.format_hooks(&RootConfig::sample());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "black https://github.com/psf/black@22.3.0");
}
