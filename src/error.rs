//! Error types for configuration and selection construction.
//!
//! Gesture handlers never fail: out-of-range pointer input is clamped.
//! Errors only arise when loading settings or when a range built outside a
//! gesture (for example from a deserialized signal) breaks the range invariants.

use crate::types::TimeRange;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, validating or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic write could not replace the target file
    #[error("Failed to persist settings to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field holds a value the interaction model cannot use
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// No platform config directory is available
    #[error("No config directory available")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised when a selection is built from unchecked values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Range violates the hour/minute bounds or ends before it starts
    #[error("Invalid time range: {0:?}")]
    InvalidRange(TimeRange),
}
