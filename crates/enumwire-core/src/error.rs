//! Error types for the generation engine

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant is fatal to the run: the caller reports it to protoc as a
/// single diagnostic and emits no files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The parameter string is empty, names no mode, or carries an unknown token
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A mode token outside the closed set reached mode resolution
    #[error("unsupported mode: {0:?}")]
    UnsupportedMode(String),

    /// A file listed for generation has no descriptor in the request
    #[error("file to generate not found in request: {0}")]
    UnknownFile(String),
}

impl GenerateError {
    /// Build a configuration error from any displayable message
    pub fn configuration(message: impl Into<String>) -> Self {
        GenerateError::Configuration(message.into())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
