// Rust guideline compliant 2026-02-06

//! Property-based tests for configuration documents.
//!
//! These tests validate universal properties that should hold across all valid inputs.

use hookpin_core::{load_str, to_yaml, HookInvocation, HookSource, LoadOptions, RootConfig};
use proptest::prelude::*;
use std::collections::HashSet;

/// Generates arbitrary repository URLs.
fn arb_url() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-z]{3,12}\\.(com|org)/[a-z0-9_-]{1,12}/[a-z0-9_.-]{1,16}")
        .unwrap()
}

/// Generates arbitrary revisions: tags and commit hashes.
fn arb_rev() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("v?[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}").unwrap(),
        prop::string::string_regex("[0-9a-f]{40}").unwrap(),
    ]
}

/// Generates arbitrary pass-through arguments.
fn arb_arg() -> impl Strategy<Value = String> {
    prop::string::string_regex("(--)?[a-zA-Z0-9_=.,/-]{0,20}").unwrap()
}

/// Generates hooks with ids unique within the list.
fn arb_hooks() -> impl Strategy<Value = Vec<HookInvocation>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap(),
            prop::collection::vec(arb_arg(), 0..6),
        ),
        0..5,
    )
    .prop_map(|hooks| {
        let mut seen = HashSet::new();
        hooks
            .into_iter()
            .filter(|(id, _)| seen.insert(id.clone()))
            .map(|(id, arguments)| HookInvocation { id, arguments })
            .collect()
    })
}

/// Generates arbitrary valid HookSource values.
fn arb_source() -> impl Strategy<Value = HookSource> {
    (arb_url(), arb_rev(), arb_hooks()).prop_map(|(repository_url, revision, hooks)| HookSource {
        repository_url,
        revision,
        hooks,
    })
}

/// Generates arbitrary valid RootConfig values.
fn arb_config() -> impl Strategy<Value = RootConfig> {
    (
        prop::collection::vec(arb_source(), 0..6),
        prop::sample::subsequence(hookpin_core::KNOWN_STAGES.to_vec(), 0..4),
    )
        .prop_map(|(sources, stages)| RootConfig {
            sources,
            default_stages: stages.into_iter().map(String::from).collect(),
        })
}

proptest! {
    /// Serializing a config and loading it again yields the same config.
    #[test]
    fn prop_yaml_round_trip(config in arb_config()) {
        let text = to_yaml(&config).unwrap();
        let loaded = load_str(&text, "prop.yaml", &LoadOptions { strict: true }).unwrap();
        prop_assert_eq!(loaded, config);
    }

    /// Every loaded source has a non-empty URL and revision.
    #[test]
    fn prop_loaded_sources_are_pinned(config in arb_config()) {
        let text = to_yaml(&config).unwrap();
        let loaded = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap();
        for source in &loaded.sources {
            prop_assert!(!source.repository_url.is_empty());
            prop_assert!(!source.revision.is_empty());
        }
    }

    /// Hook ids are unique within each loaded source.
    #[test]
    fn prop_hook_ids_unique_per_source(config in arb_config()) {
        let text = to_yaml(&config).unwrap();
        let loaded = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap();
        for source in &loaded.sources {
            let ids: HashSet<&str> = source.hooks.iter().map(|h| h.id.as_str()).collect();
            prop_assert_eq!(ids.len(), source.hooks.len());
        }
    }

    /// Blanking a revision always fails validation at that source.
    #[test]
    fn prop_blank_revision_rejected(
        mut config in arb_config().prop_filter("needs a source", |c| !c.sources.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let idx = pick.index(config.sources.len());
        config.sources[idx].revision = String::new();
        let text = to_yaml(&config).unwrap();
        let err = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap_err();
        let expected = format!("repos[{idx}]");
        prop_assert_eq!(err.location(), Some(expected.as_str()));
    }

    /// Blanking a repository URL always fails validation at that source.
    #[test]
    fn prop_blank_url_rejected(
        mut config in arb_config().prop_filter("needs a source", |c| !c.sources.is_empty()),
        pick in any::<prop::sample::Index>(),
        blank in prop::string::string_regex(" {0,3}").unwrap(),
    ) {
        let idx = pick.index(config.sources.len());
        config.sources[idx].repository_url = blank;
        let text = to_yaml(&config).unwrap();
        let err = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap_err();
        let expected = format!("repos[{idx}]");
        prop_assert_eq!(err.location(), Some(expected.as_str()));
        prop_assert!(err.to_string().contains("`repo`"));
    }

    /// Blanking a hook id always fails validation at that hook.
    #[test]
    fn prop_blank_hook_id_rejected(
        mut config in arb_config().prop_filter("needs a hook", |c| c.hook_count() > 0),
        pick in any::<prop::sample::Index>(),
        blank in prop::string::string_regex(" {0,3}").unwrap(),
    ) {
        let positions: Vec<(usize, usize)> = config
            .sources
            .iter()
            .enumerate()
            .flat_map(|(i, s)| (0..s.hooks.len()).map(move |j| (i, j)))
            .collect();
        let (i, j) = positions[pick.index(positions.len())];
        config.sources[i].hooks[j].id = blank;
        let text = to_yaml(&config).unwrap();
        let err = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap_err();
        let expected = format!("repos[{i}].hooks[{j}]");
        prop_assert_eq!(err.location(), Some(expected.as_str()));
        prop_assert!(err.to_string().contains("`id`"));
    }

    /// Repeating a hook id within its source always fails at the repeat.
    #[test]
    fn prop_duplicate_hook_id_rejected(
        mut config in arb_config().prop_filter("needs a hook", |c| c.hook_count() > 0),
        pick in any::<prop::sample::Index>(),
    ) {
        let with_hooks: Vec<usize> = config
            .sources
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.hooks.is_empty())
            .map(|(i, _)| i)
            .collect();
        let i = with_hooks[pick.index(with_hooks.len())];
        let copy = config.sources[i].hooks[0].clone();
        config.sources[i].hooks.push(copy);
        let j = config.sources[i].hooks.len() - 1;
        let text = to_yaml(&config).unwrap();
        let err = load_str(&text, "prop.yaml", &LoadOptions::default()).unwrap_err();
        let expected = format!("repos[{i}].hooks[{j}]");
        prop_assert_eq!(err.location(), Some(expected.as_str()));
        prop_assert!(err.to_string().contains("duplicates hook"));
    }
}
