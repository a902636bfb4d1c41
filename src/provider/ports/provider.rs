//! The provider contract: named capability modules with optional setup and
//! endpoints.

use crate::provider::domain::EndpointDecl;
use crate::provider::ports::environment::HostEnv;
use crate::provider::ports::registry::ProviderRegistry;
use async_trait::async_trait;

/// Failure raised by a provider setup hook.
pub type SetupFailure = Box<dyn std::error::Error + Send + Sync>;

/// Result type for provider setup hooks.
pub type SetupResult = Result<(), SetupFailure>;

/// A capability module registrable through the provider pipeline.
///
/// Implementations declare an optional name (a specification override may
/// replace it), an optional version, an optional asynchronous setup hook,
/// and an ordered sequence of endpoint declarations. The default hook is a
/// no-op and the default endpoint sequence is empty, so minimal providers
/// implement only [`Provider::declared_name`].
#[async_trait]
pub trait Provider: Send + Sync {
    /// Returns the provider's self-declared registration name, if any.
    fn declared_name(&self) -> Option<&str>;

    /// Returns the provider's self-declared version, if any.
    fn declared_version(&self) -> Option<&str> {
        None
    }

    /// Asynchronous initialization hook.
    ///
    /// Invoked once during registration with the provider's private
    /// environment and the shared registry (usable for cross-provider
    /// lookups). A failure here aborts the entire registration call.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupFailure`] to abort registration.
    async fn setup(&self, env: &HostEnv, registry: &ProviderRegistry) -> SetupResult {
        let _ = (env, registry);
        Ok(())
    }

    /// Returns the endpoints this provider declares, in mount order.
    fn endpoints(&self) -> Vec<EndpointDecl> {
        Vec::new()
    }
}
