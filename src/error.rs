//! Error types for engine configuration.
//!
//! The interactive paths never produce errors (malformed gestures are
//! dropped and logged, out-of-range geometry is clamped); everything
//! here concerns host-supplied configuration.

use thiserror::Error;

/// Errors that can occur while parsing or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid hex color: '{value}'")]
    InvalidColor {
        /// The string that failed to parse
        value: String,
    },

    /// Fill transparency is not a percentage like `"20%"`
    #[error("invalid transparency percent: '{value}'")]
    InvalidTransparency {
        /// The string that failed to parse
        value: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
