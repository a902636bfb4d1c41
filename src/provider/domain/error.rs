//! Error types for provider domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing provider domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderDomainError {
    /// The provider name is empty.
    #[error("provider name must not be empty")]
    EmptyProviderName,

    /// The provider name contains characters outside `[A-Za-z0-9_.-]`.
    #[error(
        "provider name '{0}' contains invalid characters (only alphanumerics, '_', '.' and '-' allowed)"
    )]
    InvalidProviderName(String),

    /// The provider version is empty after trimming.
    #[error("provider version must not be empty")]
    EmptyVersion,

    /// The endpoint route is neither empty nor an absolute segment path.
    #[error("endpoint route '{0}' must be empty or match '/segment(/segment)*'")]
    InvalidRoute(String),
}

/// Error returned while parsing an endpoint method from its declared string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized endpoint method: {0}")]
pub struct ParseMethodError(pub String);
