//! Error types for configuration and continuation token handling

use thiserror::Error;

/// Configuration defects detected when a component is constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid configuration for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },
}

impl ConfigError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField { field: field.into() }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Continuation token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unexpected token type: expected {expected}, found {actual}")]
    TokenTypeMismatch { expected: String, actual: String },

    #[error("Token was issued for a different subject")]
    SubjectMismatch,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
