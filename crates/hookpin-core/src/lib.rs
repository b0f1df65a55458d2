// Rust guideline compliant 2026-02-06

//! Hookpin Core Library
//!
//! This crate provides the foundational components for working with pre-commit
//! hook configuration documents:
//! - Data models (RootConfig, HookSource, HookInvocation)
//! - Document loading, validation and serialization
//! - Tool settings (file and environment layering)
//! - Error types and result handling

pub mod document;
pub mod error;
pub mod models;
pub mod settings;

pub use document::{load, load_str, load_with, save, to_yaml, LoadOptions, KNOWN_STAGES};
pub use error::{Error, Result};
pub use models::{HookInvocation, HookSource, RootConfig};
pub use settings::{OutputFormat, Settings, DEFAULT_CONFIG_FILE};
