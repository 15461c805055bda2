//! Error types for schema rewriting.
//!
//! The passes themselves are total; errors only arise at the JSON bridge,
//! when resolving pass names, and when validating options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Variant names and their serialized `snake_case` strings must never change
/// across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// JSON (de)serialization error (malformed input or invalid AST structure).
    JsonParseError,
    /// A pass name in the configuration is not recognised.
    UnknownPass,
    /// An option value would produce invalid enum constant names.
    InvalidOption,
}

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("JSON (de)serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown pass '{name}' (expected one of: lift-messages, complete-zero, prefix-digits)")]
    UnknownPass { name: String },

    #[error("Invalid option {option}: {reason}")]
    InvalidOption { option: String, reason: String },
}

impl RewriteError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            RewriteError::JsonError(_) => ErrorCode::JsonParseError,
            RewriteError::UnknownPass { .. } => ErrorCode::UnknownPass,
            RewriteError::InvalidOption { .. } => ErrorCode::InvalidOption,
        }
    }

    /// Produces a structured JSON error.
    ///
    /// Format: `{"code": "...", "message": "..."}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        })
    }
}
