//! Custom error types for the finance panel
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for panel operations
#[derive(Error, Debug)]
pub enum PanelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Local input validation errors
    #[error("{0}")]
    Validation(String),

    /// The host answered a request with an error result
    #[error("{message}")]
    Remote { code: String, message: String },

    /// The call channel to the host is unavailable or broke mid-request
    #[error("Channel error: {0}")]
    Channel(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PanelError {
    /// Create an error result as the host reports it
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure came back from the host
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Reduce the error to the text shown in the error banner.
    ///
    /// Host errors with an empty message fall back to `fallback`, the
    /// action-specific text ("Failed to save plan", ...).
    pub fn banner_message(&self, fallback: &str) -> String {
        match self {
            Self::Remote { message, .. } if message.trim().is_empty() => fallback.to_string(),
            Self::Remote { message, .. } => message.clone(),
            Self::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for panel operations
pub type PanelResult<T> = Result<T, PanelError>;
