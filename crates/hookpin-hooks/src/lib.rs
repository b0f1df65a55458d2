// Rust guideline compliant 2026-02-06

//! Hookpin Git Hooks
//!
//! This crate provides Git hook implementations for Hookpin:
//! - Pre-commit validation of the hook configuration document

pub mod pre_commit;

pub use pre_commit::pre_commit_hook;
