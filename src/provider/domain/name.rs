//! Validated provider name type.

use super::ProviderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated provider registration identifier.
///
/// Provider names key the registry and prefix every mounted endpoint path
/// (e.g. a provider named `billing` mounts under `/billing`). Names are
/// restricted to `[A-Za-z0-9_.-]+` so they always form a single safe path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderName(String);

impl ProviderName {
    /// Creates a validated provider name.
    ///
    /// The value is taken verbatim; case is preserved. Only characters in
    /// `[A-Za-z0-9_.-]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderDomainError::EmptyProviderName`] when the value is
    /// empty, or [`ProviderDomainError::InvalidProviderName`] when it
    /// contains characters outside `[A-Za-z0-9_.-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ProviderDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(ProviderDomainError::EmptyProviderName);
        }

        let is_valid = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-');

        if !is_valid {
            return Err(ProviderDomainError::InvalidProviderName(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the provider name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProviderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
