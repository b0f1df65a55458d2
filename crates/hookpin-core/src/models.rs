// Rust guideline compliant 2026-02-06

//! Core data models for hook configuration documents.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single hook invocation within a source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookInvocation {
    /// Hook identifier, unique within its source.
    pub id: String,
    /// Arguments passed through verbatim to the external tool.
    #[serde(rename = "args", default)]
    pub arguments: Vec<String>,
}

impl HookInvocation {
    /// Creates a hook invocation with the given arguments.
    pub fn new<I, S>(id: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }
}

/// An external repository pinned at a revision, with the hooks it provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSource {
    /// Repository URL.
    #[serde(rename = "repo")]
    pub repository_url: String,
    /// Pinned tag or commit.
    #[serde(rename = "rev")]
    pub revision: String,
    /// Hooks to run from this repository, in document order.
    pub hooks: Vec<HookInvocation>,
}

impl HookSource {
    /// Creates a source with no hooks.
    pub fn new(repository_url: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            revision: revision.into(),
            hooks: Vec::new(),
        }
    }

    /// Appends a hook and returns the source, for building configs in code.
    pub fn with_hook(mut self, hook: HookInvocation) -> Self {
        self.hooks.push(hook);
        self
    }
}

/// The root of a hook configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    /// Hook sources, in document order.
    #[serde(rename = "repos")]
    pub sources: Vec<HookSource>,
    /// Stages hooks run at unless they say otherwise. Empty means the runner default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_stages: Vec<String>,
}

impl RootConfig {
    /// Iterates over every hook together with the source that declares it.
    pub fn hooks(&self) -> impl Iterator<Item = (&HookSource, &HookInvocation)> {
        self.sources
            .iter()
            .flat_map(|source| source.hooks.iter().map(move |hook| (source, hook)))
    }

    /// Finds the first hook with the given id across all sources.
    pub fn find_hook(&self, id: &str) -> Option<(&HookSource, &HookInvocation)> {
        self.hooks().find(|(_, hook)| hook.id == id)
    }

    /// Total number of hooks across all sources.
    pub fn hook_count(&self) -> usize {
        self.sources.iter().map(|s| s.hooks.len()).sum()
    }

    /// The canonical formatter / style checker / import sorter document.
    pub fn sample() -> Self {
        Self {
            sources: vec![
                HookSource::new("https://github.com/psf/black", "22.3.0").with_hook(
                    HookInvocation::new("black", ["--preview", "--line-length", "79"]),
                ),
                HookSource::new("https://github.com/pycqa/flake8", "4.0.1")
                    .with_hook(HookInvocation::new("flake8", ["--max-line-length", "79"])),
                HookSource::new("https://github.com/pycqa/isort", "5.10.1").with_hook(
                    HookInvocation::new("isort", ["--profile", "black", "--line-length", "79"]),
                ),
            ],
            default_stages: vec!["commit".to_string()],
        }
    }

    /// Validates the semantic invariants of a config built in code.
    ///
    /// Documents read through [`crate::load`] are already validated; this
    /// applies the same rules to values constructed or edited programmatically.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - A source has an empty repository URL or revision
    /// - A hook has an empty id
    /// - A hook id appears twice within one source
    /// - A default stage is empty
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_as("<memory>")
    }

    pub(crate) fn validate_as(&self, origin: &str) -> crate::Result<()> {
        let invalid = |location: String, field: &str, reason: String| crate::Error::Validation {
            origin: origin.to_string(),
            location,
            field: field.to_string(),
            reason,
        };

        for (i, source) in self.sources.iter().enumerate() {
            let at = format!("repos[{i}]");
            if source.repository_url.trim().is_empty() {
                return Err(invalid(at, "repo", "must not be empty".to_string()));
            }
            if source.revision.trim().is_empty() {
                return Err(invalid(at, "rev", "must not be empty".to_string()));
            }

            let mut seen = HashSet::new();
            for (j, hook) in source.hooks.iter().enumerate() {
                let at = format!("repos[{i}].hooks[{j}]");
                if hook.id.trim().is_empty() {
                    return Err(invalid(at, "id", "must not be empty".to_string()));
                }
                if !seen.insert(hook.id.as_str()) {
                    return Err(invalid(
                        at,
                        "id",
                        format!("duplicates hook '{}' in the same repo", hook.id),
                    ));
                }
            }
        }

        for (i, stage) in self.default_stages.iter().enumerate() {
            if stage.trim().is_empty() {
                return Err(invalid(
                    format!("default_stages[{i}]"),
                    "default_stages",
                    "must not contain empty stage names".to_string(),
                ));
            }
        }

        Ok(())
    }
}
