//! Error types for conversion operations

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors that can occur while turning HTML into a document
///
/// Malformed markup is never an error: html5ever recovers from it and the
/// converter accepts whatever tree results. Only inputs that cannot be read as
/// HTML at all, or that exceed a configured limit, are rejected.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The byte stream could not be decoded as HTML
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Input exceeds the configured size cap
    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Document could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A deserialized document violates a structural rule of the model
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl ConversionError {
    /// Whether the failure stems from the caller's input rather than the system
    ///
    /// Request handlers map these to a validation response (HTTP 400).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConversionError::ParseError(_) | ConversionError::InputTooLarge { .. }
        )
    }
}
