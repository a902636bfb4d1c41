//! Host environment contract consumed by the registration pipeline.

use crate::provider::domain::{RouteGuard, StateHandle};
use crate::provider::ports::diagnostics::DiagnosticsSink;
use crate::provider::ports::router::RoutingSurface;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied environment: diagnostics, routing, and optional ambient
/// capabilities.
///
/// The environment is consumed, not owned: registration shallow-copies it
/// once per provider, swapping in the provider's private routing
/// sub-surface. Diagnostics sink, ambient guard, and state handle are
/// shared by reference across all copies.
#[derive(Clone)]
pub struct HostEnv {
    diagnostics: Arc<dyn DiagnosticsSink>,
    router: Arc<dyn RoutingSurface>,
    security: Option<Arc<dyn RouteGuard>>,
    state: Option<StateHandle>,
}

impl HostEnv {
    /// Creates an environment from its two mandatory capabilities.
    #[must_use]
    pub const fn new(
        diagnostics: Arc<dyn DiagnosticsSink>,
        router: Arc<dyn RoutingSurface>,
    ) -> Self {
        Self {
            diagnostics,
            router,
            security: None,
            state: None,
        }
    }

    /// Sets the ambient security guard applied to endpoints that do not
    /// declare their own policy.
    #[must_use]
    pub fn with_security(mut self, guard: Arc<dyn RouteGuard>) -> Self {
        self.security = Some(guard);
        self
    }

    /// Attaches an opaque state capability forwarded into every provider
    /// environment.
    #[must_use]
    pub fn with_state(mut self, state: StateHandle) -> Self {
        self.state = Some(state);
        self
    }

    /// Returns the diagnostics sink.
    #[must_use]
    pub const fn diagnostics(&self) -> &Arc<dyn DiagnosticsSink> {
        &self.diagnostics
    }

    /// Returns the routing surface.
    #[must_use]
    pub const fn router(&self) -> &Arc<dyn RoutingSurface> {
        &self.router
    }

    /// Returns the ambient security guard, if any.
    #[must_use]
    pub const fn security(&self) -> Option<&Arc<dyn RouteGuard>> {
        self.security.as_ref()
    }

    /// Returns the shared state capability, if any.
    #[must_use]
    pub const fn state(&self) -> Option<&StateHandle> {
        self.state.as_ref()
    }

    /// Returns a shallow copy with the routing surface replaced.
    ///
    /// This is the per-provider environment: private routing, shared
    /// everything else.
    #[must_use]
    pub fn scoped(&self, router: Arc<dyn RoutingSurface>) -> Self {
        let mut scoped = self.clone();
        scoped.router = router;
        scoped
    }
}

impl fmt::Debug for HostEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostEnv")
            .field("security", &self.security.is_some())
            .field("state", &self.state.is_some())
            .finish_non_exhaustive()
    }
}
