//! Provider version value object.

use super::ProviderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version assigned to providers that declare none and resolve without a
/// manifest.
const DEFAULT_VERSION: &str = "0.0.0";

/// Resolved provider version string.
///
/// Versions are carried verbatim from the provider's own declaration or from
/// the loader's manifest; they are informational and never compared
/// semantically by the registration pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderVersion(String);

impl ProviderVersion {
    /// Creates a version from a declared or manifest-derived string.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderDomainError::EmptyVersion`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProviderDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ProviderDomainError::EmptyVersion);
        }
        Ok(Self(normalized))
    }

    /// Returns the fixed fallback version `0.0.0`.
    #[must_use]
    pub fn fallback() -> Self {
        Self(DEFAULT_VERSION.to_owned())
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProviderVersion {
    fn default() -> Self {
        Self::fallback()
    }
}

impl AsRef<str> for ProviderVersion {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProviderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
