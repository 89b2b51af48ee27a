//! Error types for NDFC request construction.
//!
//! This module provides the error hierarchy shared by all request crates.
//! Failures are raised at the moment an out-of-constraint value is assigned
//! or a path is read with a mandatory parameter unset; there is no retry,
//! recovery, or partial construction.

use thiserror::Error;

/// Main error type for request-construction operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field was assigned a value that violates its declared constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A path was computed before a mandatory parameter was set.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Invalid endpoint or base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Unrecognized HTTP verb
    #[error("Invalid verb: {0}")]
    InvalidVerb(String),

    /// A boolean string other than "true" or "false"
    #[error("Invalid boolean string: {0}")]
    InvalidBooleanString(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized result type for request-construction operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidVerb(_) => "INVALID_VERB",
            Self::InvalidBooleanString(_) => "INVALID_BOOLEAN_STRING",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

// Conversions from external error types
impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}
