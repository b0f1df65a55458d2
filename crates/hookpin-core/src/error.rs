// Rust guideline compliant 2026-02-06

//! Error types for the Hookpin core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Hookpin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hookpin operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be read or written.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Malformed structured text, or a value of the wrong shape.
    #[error("Parse error in {origin}{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// File path or other name of the document source.
        origin: String,
        /// 1-based line of the offending node, when the parser reports one.
        line: Option<usize>,
        /// Parser message.
        message: String,
    },

    /// A required field is missing or empty, or otherwise invalid.
    ///
    /// Validation runs on the parsed tree, which has no source positions, so
    /// the offending node is named by its path (`repos[1]`,
    /// `repos[0].hooks[2]`, `default_stages[0]`) rather than by line.
    #[error("Validation error in {origin} at {location}: `{field}` {reason}")]
    Validation {
        /// File path or other name of the document source.
        origin: String,
        /// Path to the offending node, e.g. `repos[1].hooks[0]`.
        location: String,
        /// Name of the offending key.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// YAML emission failed.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Invalid tool settings.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl Error {
    /// Returns the reported line for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => *line,
            _ => None,
        }
    }

    /// Returns the location path for validation errors.
    pub fn location(&self) -> Option<&str> {
        match self {
            Error::Validation { location, .. } => Some(location),
            _ => None,
        }
    }
}
