//! The registration entry point: resolution, setup fan-out, and mounting.

use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::provider::domain::ProviderName;
use crate::provider::ports::{
    diagnostics::DiagnosticLevel,
    environment::HostEnv,
    loader::ProviderLoader,
    provider::SetupFailure,
    registry::{ProviderRegistry, RegistryEntry},
};
use crate::provider::services::{endpoints, naming, normalize, setup, spec::SpecBatch, versioning};

/// Fatal registration errors.
///
/// Everything else in the pipeline is tolerated per-spec and surfaced only
/// through the diagnostics sink; setup-hook failures alone abort the call.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A provider's setup hook failed, aborting the whole call.
    #[error("setup hook failed for provider '{provider}': {source}")]
    SetupFailed {
        /// The provider whose hook failed.
        provider: ProviderName,
        /// The hook's failure.
        #[source]
        source: SetupFailure,
    },

    /// A provider's setup hook exceeded the configured timeout.
    #[error("setup hook timed out for provider '{provider}' after {timeout:?}")]
    SetupTimedOut {
        /// The provider whose hook timed out.
        provider: ProviderName,
        /// The configured per-provider timeout.
        timeout: Duration,
    },
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Provider registration orchestration service.
///
/// Drives the whole pipeline: specification normalization, name and version
/// resolution, registry population (last duplicate wins), concurrent setup
/// invocation, and endpoint mounting. The environment is injected
/// explicitly by the caller; the service owns only the loader, the clock,
/// and the setup-timeout policy.
#[derive(Clone)]
pub struct ProviderRegistrationService<L, C>
where
    L: ProviderLoader,
    C: Clock + Send + Sync,
{
    loader: Arc<L>,
    clock: Arc<C>,
    setup_timeout: Option<Duration>,
}

impl<L, C> ProviderRegistrationService<L, C>
where
    L: ProviderLoader,
    C: Clock + Send + Sync,
{
    /// Creates a registration service with no setup timeout.
    ///
    /// Without a timeout a hung setup hook stalls registration
    /// indefinitely; long-running hosts should prefer
    /// [`ProviderRegistrationService::with_setup_timeout`].
    #[must_use]
    pub const fn new(loader: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            loader,
            clock,
            setup_timeout: None,
        }
    }

    /// Sets a per-provider setup-hook timeout.
    #[must_use]
    pub const fn with_setup_timeout(mut self, timeout: Duration) -> Self {
        self.setup_timeout = Some(timeout);
        self
    }

    /// Registers a batch of provider specifications into a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when a setup hook fails or times out.
    /// Invalid specifications never fail the call; they are dropped with
    /// diagnostics.
    pub async fn register(
        &self,
        env: &HostEnv,
        batch: impl Into<SpecBatch>,
    ) -> RegistrationResult<ProviderRegistry> {
        self.register_into(env, batch, ProviderRegistry::new()).await
    }

    /// Registers a batch of provider specifications into an existing
    /// registry.
    ///
    /// Pre-existing entries keep their registration but participate again
    /// in setup orchestration: each receives a fresh sub-surface and its
    /// setup hook runs alongside the new providers', enabling
    /// cross-provider lookups through the shared registry. An empty batch
    /// returns the seed registry unchanged apart from that orchestration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when a setup hook fails or times out.
    /// Callers must treat a failed call as having possibly-partial side
    /// effects: sub-surfaces for some providers may already exist.
    pub async fn register_into(
        &self,
        env: &HostEnv,
        batch: impl Into<SpecBatch>,
        seed: ProviderRegistry,
    ) -> RegistrationResult<ProviderRegistry> {
        let registry = self.populate_registry(env, batch.into(), seed).await;

        let prepared = setup::prepare_providers(env, &registry);
        setup::run_setup_hooks(&prepared, &registry, self.setup_timeout).await?;

        for provider in &prepared {
            endpoints::register_endpoints(provider);
        }

        Ok(registry)
    }

    /// Resolves every specification in input order and populates the
    /// registry, overwriting duplicate names so the last spec wins.
    async fn populate_registry(
        &self,
        env: &HostEnv,
        batch: SpecBatch,
        seed: ProviderRegistry,
    ) -> ProviderRegistry {
        let diagnostics = env.diagnostics();
        let mut registry = seed;

        for spec in batch.into_specs() {
            let Some(normalized) =
                normalize::normalize_spec(self.loader.as_ref(), diagnostics.as_ref(), spec).await
            else {
                continue;
            };

            let Some(name) = naming::resolve_name(diagnostics.as_ref(), &normalized) else {
                continue;
            };

            let version = match versioning::resolve_version(self.loader.as_ref(), &normalized).await
            {
                Ok(version) => version,
                Err(err) => {
                    diagnostics.log(
                        DiagnosticLevel::Warn,
                        &format!("dropping provider '{name}': {err}"),
                    );
                    continue;
                }
            };

            diagnostics.log(
                DiagnosticLevel::Debug,
                &format!("registering provider '{name}' version {version}"),
            );
            registry.insert(RegistryEntry::new(
                name,
                version,
                normalized.locator,
                normalized.instance,
                &*self.clock,
            ));
        }

        registry
    }
}
