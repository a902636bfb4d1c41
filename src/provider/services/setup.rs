//! Setup orchestration: per-provider environments and joint hook awaiting.

use futures::future;
use std::sync::Arc;
use std::time::Duration;

use crate::provider::domain::ProviderName;
use crate::provider::ports::{
    environment::HostEnv, provider::Provider, registry::ProviderRegistry,
};
use crate::provider::services::registration::RegistrationError;

/// One registry entry prepared for setup and mounting: its private
/// environment (routing sub-surface swapped in) and the live instance.
pub(crate) struct PreparedProvider {
    pub name: ProviderName,
    pub env: HostEnv,
    pub instance: Arc<dyn Provider>,
}

/// Allocates a routing sub-surface and a scoped environment for every
/// registry entry.
///
/// Sub-surfaces attach under `/<name>` on the root surface. This runs
/// strictly before any setup hook, so partially-failed registrations may
/// leave sub-surfaces behind.
pub(crate) fn prepare_providers(env: &HostEnv, registry: &ProviderRegistry) -> Vec<PreparedProvider> {
    registry
        .entries()
        .map(|entry| {
            let surface = env.router().scope(&format!("/{}", entry.name()));
            PreparedProvider {
                name: entry.name().clone(),
                env: env.scoped(surface),
                instance: Arc::clone(entry.instance()),
            }
        })
        .collect()
}

/// Invokes every provider's setup hook and awaits them jointly.
///
/// All hooks are launched before any is awaited; execution interleaves
/// cooperatively. The first hook failure aborts the whole registration
/// call, so callers must treat a failed call as having possibly-partial
/// side effects.
pub(crate) async fn run_setup_hooks(
    prepared: &[PreparedProvider],
    registry: &ProviderRegistry,
    timeout: Option<Duration>,
) -> Result<(), RegistrationError> {
    let hooks = prepared.iter().map(|provider| run_one_hook(provider, registry, timeout));
    future::try_join_all(hooks).await.map(|_| ())
}

async fn run_one_hook(
    provider: &PreparedProvider,
    registry: &ProviderRegistry,
    timeout: Option<Duration>,
) -> Result<(), RegistrationError> {
    let hook = provider.instance.setup(&provider.env, registry);

    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, hook).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => {
                return Err(RegistrationError::SetupTimedOut {
                    provider: provider.name.clone(),
                    timeout: limit,
                });
            }
        },
        None => hook.await,
    };

    outcome.map_err(|source| RegistrationError::SetupFailed {
        provider: provider.name.clone(),
        source,
    })
}
