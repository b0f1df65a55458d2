// Rust guideline compliant 2026-02-06

//! Command implementations for the Hookpin CLI.

pub mod hooks;
pub mod sample;
pub mod show;
pub mod validate;
