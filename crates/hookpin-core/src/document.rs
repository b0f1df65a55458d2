// Rust guideline compliant 2026-02-06

//! Loading, validation and serialization of configuration documents.
//!
//! Loading happens in three passes over the text:
//! 1. Parse into a generic YAML tree to catch syntax errors and unknown keys.
//! 2. Deserialize into a lenient shape where required keys are optional, so a
//!    missing key becomes a validation error with a location instead of a
//!    parse error.
//! 3. Check the semantic invariants and build the [`RootConfig`].

use crate::models::{HookInvocation, HookSource, RootConfig};
use crate::{Error, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Stage names understood by the hook runner.
pub const KNOWN_STAGES: &[&str] = &[
    "commit",
    "merge-commit",
    "push",
    "prepare-commit-msg",
    "commit-msg",
    "post-checkout",
    "post-commit",
    "post-merge",
    "post-rewrite",
    "manual",
    "pre-commit",
    "pre-merge-commit",
    "pre-push",
    "pre-rebase",
];

const ROOT_KEYS: &[&str] = &["repos", "default_stages"];
const SOURCE_KEYS: &[&str] = &["repo", "rev", "hooks"];
const HOOK_KEYS: &[&str] = &["id", "args"];

/// Options controlling how strictly a document is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat unknown keys and unknown stage names as errors instead of warnings.
    pub strict: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    // A bare `-` item deserializes to `None` and is reported as a missing key.
    repos: Option<Vec<Option<RawSource>>>,
    default_stages: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    repo: Option<String>,
    rev: Option<String>,
    hooks: Option<Vec<Option<RawHook>>>,
}

#[derive(Debug, Deserialize)]
struct RawHook {
    id: Option<String>,
    args: Option<Vec<String>>,
}

/// Loads and validates a configuration document with default options.
///
/// # Arguments
///
/// * `path` - Path to the YAML document
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not well-formed YAML of the expected shape
/// - A required field is missing or empty, or a hook id is duplicated
pub fn load(path: impl AsRef<Path>) -> Result<RootConfig> {
    load_with(path, &LoadOptions::default())
}

/// Loads and validates a configuration document.
///
/// # Errors
///
/// See [`load`]. With `options.strict`, unknown keys and stage names are
/// also rejected.
pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<RootConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading hook configuration");
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_str(&text, &path.display().to_string(), options)?;
    info!(
        path = %path.display(),
        sources = config.sources.len(),
        hooks = config.hook_count(),
        "loaded hook configuration"
    );
    Ok(config)
}

/// Parses and validates a configuration document held in memory.
///
/// `origin` names the document in error messages.
///
/// # Errors
///
/// See [`load_with`].
pub fn load_str(text: &str, origin: &str, options: &LoadOptions) -> Result<RootConfig> {
    let raw = if is_blank(text) {
        RawConfig::default()
    } else {
        let tree: Value = serde_yaml::from_str(text).map_err(|e| parse_error(origin, e))?;
        if tree.is_null() {
            RawConfig::default()
        } else {
            check_keys(&tree, origin, options)?;
            serde_yaml::from_str(text).map_err(|e| parse_error(origin, e))?
        }
    };

    let config = build(raw, origin, options)?;
    config.validate_as(origin)?;
    Ok(config)
}

/// Serializes a config into the document format.
///
/// # Errors
///
/// Returns an error if YAML emission fails.
pub fn to_yaml(config: &RootConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| Error::Serialize(e.to_string()))
}

/// Writes a config to `path` in the document format.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save(config: &RootConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = to_yaml(config)?;
    std::fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn parse_error(origin: &str, err: serde_yaml::Error) -> Error {
    let line = err.location().map(|l| l.line());
    let mut message = err.to_string();
    // The line is reported separately.
    if let Some(idx) = message.find(" at line ") {
        message.truncate(idx);
    }
    Error::Parse {
        origin: origin.to_string(),
        line,
        message,
    }
}

fn check_keys(tree: &Value, origin: &str, options: &LoadOptions) -> Result<()> {
    let mut unknown = Vec::new();

    if let Some(root) = tree.as_mapping() {
        collect_unknown(root, ROOT_KEYS, "<root>", &mut unknown);

        let repos = root.get("repos").and_then(Value::as_sequence);
        for (i, source) in repos.into_iter().flatten().enumerate() {
            let Some(source) = source.as_mapping() else {
                continue;
            };
            collect_unknown(source, SOURCE_KEYS, &format!("repos[{i}]"), &mut unknown);

            let hooks = source.get("hooks").and_then(Value::as_sequence);
            for (j, hook) in hooks.into_iter().flatten().enumerate() {
                if let Some(hook) = hook.as_mapping() {
                    let at = format!("repos[{i}].hooks[{j}]");
                    collect_unknown(hook, HOOK_KEYS, &at, &mut unknown);
                }
            }
        }
    }

    for (location, key) in unknown {
        if options.strict {
            return Err(Error::Validation {
                origin: origin.to_string(),
                location,
                field: key,
                reason: "is not a recognized key".to_string(),
            });
        }
        warn!(origin, %location, %key, "ignoring unrecognized key");
    }

    Ok(())
}

fn collect_unknown(
    mapping: &Mapping,
    allowed: &[&str],
    location: &str,
    out: &mut Vec<(String, String)>,
) {
    for key in mapping.keys() {
        let name = match key.as_str() {
            Some(name) => name.to_string(),
            None => format!("{key:?}"),
        };
        if !allowed.contains(&name.as_str()) {
            out.push((location.to_string(), name));
        }
    }
}

fn build(raw: RawConfig, origin: &str, options: &LoadOptions) -> Result<RootConfig> {
    let missing = |location: String, field: &str| Error::Validation {
        origin: origin.to_string(),
        location,
        field: field.to_string(),
        reason: "is required".to_string(),
    };

    let raw_sources = raw
        .repos
        .ok_or_else(|| missing("<root>".to_string(), "repos"))?;

    let mut sources = Vec::with_capacity(raw_sources.len());
    for (i, source) in raw_sources.into_iter().enumerate() {
        let at = format!("repos[{i}]");
        let source = source.ok_or_else(|| missing(at.clone(), "repo"))?;
        let repository_url = source.repo.ok_or_else(|| missing(at.clone(), "repo"))?;
        let revision = source.rev.ok_or_else(|| missing(at.clone(), "rev"))?;
        let raw_hooks = source.hooks.ok_or_else(|| missing(at.clone(), "hooks"))?;

        let mut hooks = Vec::with_capacity(raw_hooks.len());
        for (j, hook) in raw_hooks.into_iter().enumerate() {
            let hook_at = format!("repos[{i}].hooks[{j}]");
            let hook = hook.ok_or_else(|| missing(hook_at.clone(), "id"))?;
            let id = hook.id.ok_or_else(|| missing(hook_at, "id"))?;
            hooks.push(HookInvocation {
                id,
                arguments: hook.args.unwrap_or_default(),
            });
        }

        sources.push(HookSource {
            repository_url,
            revision,
            hooks,
        });
    }

    let default_stages = normalize_stages(raw.default_stages.unwrap_or_default(), origin, options)?;

    Ok(RootConfig {
        sources,
        default_stages,
    })
}

fn normalize_stages(stages: Vec<String>, origin: &str, options: &LoadOptions) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(stages.len());

    for (i, stage) in stages.into_iter().enumerate() {
        if stage.trim().is_empty() {
            return Err(Error::Validation {
                origin: origin.to_string(),
                location: format!("default_stages[{i}]"),
                field: "default_stages".to_string(),
                reason: "must not contain empty stage names".to_string(),
            });
        }
        if !KNOWN_STAGES.contains(&stage.as_str()) {
            if options.strict {
                return Err(Error::Validation {
                    origin: origin.to_string(),
                    location: format!("default_stages[{i}]"),
                    field: "default_stages".to_string(),
                    reason: format!("names unknown stage '{stage}'"),
                });
            }
            warn!(origin, %stage, "unknown stage in default_stages");
        }

        if seen.contains(&stage) {
            warn!(origin, %stage, "dropping duplicate stage in default_stages");
            continue;
        }
        seen.insert(stage.clone());
        out.push(stage);
    }

    Ok(out)
}
