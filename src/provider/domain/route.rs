//! Validated endpoint route path type.

use super::ProviderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated endpoint route: empty, or `/segment(/segment)*`.
///
/// The empty route mounts a provider's namespace root. Segments must be
/// non-empty printable ASCII without `/` or whitespace, which accommodates
/// parameter markers such as `:id` or `{id}` without committing to a
/// particular routing dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Creates a validated route path.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderDomainError::InvalidRoute`] when the value is
    /// non-empty and does not match the `/segment(/segment)*` shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ProviderDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Ok(Self(raw));
        }

        let Some(rest) = raw.strip_prefix('/') else {
            return Err(ProviderDomainError::InvalidRoute(raw));
        };

        let segments_valid = !rest.is_empty()
            && rest.split('/').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_graphic() && c != '/')
            });

        if !segments_valid {
            return Err(ProviderDomainError::InvalidRoute(raw));
        }

        Ok(Self(raw))
    }

    /// Returns true when the route is the empty namespace root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the route as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
