//! Provider version resolution.

use thiserror::Error;

use crate::provider::domain::{ProviderDomainError, ProviderVersion};
use crate::provider::ports::loader::{ProviderLoadError, ProviderLoader};
use crate::provider::services::normalize::NormalizedSpec;

/// Failure while deriving a provider version; the offending spec is dropped
/// with a diagnostic.
#[derive(Debug, Error)]
pub(crate) enum VersionResolutionError {
    /// The declared or manifest version string failed validation.
    #[error(transparent)]
    Domain(#[from] ProviderDomainError),
    /// The loader could not consult the locator's manifest.
    #[error(transparent)]
    Load(#[from] ProviderLoadError),
}

/// Derives the version for a normalized spec.
///
/// Precedence: the module's own declaration verbatim, else the loader's
/// manifest version for locator-resolved modules, else the fixed fallback
/// `0.0.0`.
pub(crate) async fn resolve_version<L: ProviderLoader>(
    loader: &L,
    normalized: &NormalizedSpec,
) -> Result<ProviderVersion, VersionResolutionError> {
    if let Some(declared) = normalized.instance.declared_version() {
        return Ok(ProviderVersion::new(declared)?);
    }

    if let Some(locator) = normalized.locator.as_deref() {
        if let Some(manifest) = loader.manifest_version(locator).await? {
            return Ok(ProviderVersion::new(manifest)?);
        }
    }

    Ok(ProviderVersion::fallback())
}
