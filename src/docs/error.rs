//! Error types for the docs module
//!
//! This module defines the custom error types used throughout the doc
//! comment resolution code, using thiserror for better error handling.

use thiserror::Error;

/// Main error type for doc comment operations
#[derive(Error, Debug)]
pub enum DocsError {
    /// IO errors (file operations, directory access, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A structurally inconsistent member descriptor or type signature
    #[error("invalid member descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// No candidate directory contained the expected doc comment file
    #[error("doc comment file for assembly '{assembly}' was not found in any configured directory")]
    SidecarNotFound { assembly: String },

    /// The doc comment XML is not well-formed or does not match the
    /// expected member-container shape
    #[error("doc comment XML failed validation: {message}")]
    SchemaValidation { message: String },
}

/// Result type alias for doc comment operations
pub type DocsResult<T> = Result<T, DocsError>;

impl From<quick_xml::Error> for DocsError {
    fn from(err: quick_xml::Error) -> Self {
        DocsError::SchemaValidation {
            message: err.to_string(),
        }
    }
}

impl DocsError {
    /// Build an `InvalidDescriptor` error from a reason string
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        DocsError::InvalidDescriptor {
            reason: reason.into(),
        }
    }

    /// Build a `SchemaValidation` error from a message string
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        DocsError::SchemaValidation {
            message: message.into(),
        }
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> DocsResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> DocsResult<T> {
        self.map_err(|e| DocsError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
