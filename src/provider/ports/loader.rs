//! Loader port resolving provider locators to live instances.

use crate::provider::ports::provider::Provider;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider loader operations.
pub type ProviderLoadResult<T> = Result<T, ProviderLoadError>;

/// Resolution contract from opaque locator strings to provider instances.
///
/// A locator is an opaque key into whatever registration mechanism the host
/// chooses: a static table supplied at process start, a dynamic-library
/// facility, or anything else that can produce a [`Provider`]. Loader
/// failures are tolerated per-spec by the registration pipeline: the
/// offending specification is dropped with a diagnostic and the batch
/// continues.
#[async_trait]
pub trait ProviderLoader: Send + Sync {
    /// Resolves a locator to a live provider instance.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderLoadError::UnknownLocator`] when the locator is not
    /// registered, or [`ProviderLoadError::LoadFailed`] when instantiation
    /// fails.
    async fn load(&self, locator: &str) -> ProviderLoadResult<Arc<dyn Provider>>;

    /// Returns the manifest-declared version for a locator, if the loader's
    /// registration mechanism carries one.
    ///
    /// Consulted only for locator-resolved providers that declare no version
    /// of their own.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderLoadError::ManifestUnavailable`] when the manifest
    /// cannot be read; the registration pipeline then drops the spec.
    async fn manifest_version(&self, locator: &str) -> ProviderLoadResult<Option<String>>;
}

/// Errors returned by provider loader implementations.
#[derive(Debug, Clone, Error)]
pub enum ProviderLoadError {
    /// No provider is registered under the locator.
    #[error("unknown provider locator: {0}")]
    UnknownLocator(String),

    /// The provider factory failed while instantiating the module.
    #[error("provider load failed for locator '{locator}': {source}")]
    LoadFailed {
        /// The locator being resolved.
        locator: String,
        /// Underlying factory failure.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The locator's manifest could not be consulted for a version.
    #[error("manifest unavailable for locator '{locator}': {reason}")]
    ManifestUnavailable {
        /// The locator being resolved.
        locator: String,
        /// Reason string.
        reason: String,
    },
}

impl ProviderLoadError {
    /// Wraps a factory failure for the given locator.
    pub fn load_failed(
        locator: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::LoadFailed {
            locator: locator.into(),
            source: Arc::new(source),
        }
    }
}
