//! Routing surface port: the opaque capability endpoints are mounted on.

use crate::provider::domain::{EndpointHandler, EndpointMethod, RouteGuard};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for routing surface operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// A fully-composed route chain ready to mount.
///
/// The chain carries the final mount path, the (possibly wrapped) handler,
/// an optional guard placed ahead of it, and optional openapi metadata.
/// Streaming mounts carry the raw handler with neither guard nor metadata.
#[derive(Clone)]
pub struct RouteMount {
    /// Endpoint method.
    pub method: EndpointMethod,
    /// Final mount path, namespace prefix included.
    pub path: String,
    /// Guard run ahead of the handler, if one applies.
    pub guard: Option<Arc<dyn RouteGuard>>,
    /// The handler terminating the chain.
    pub handler: EndpointHandler,
    /// Openapi metadata attached for documentation tooling.
    pub openapi: Option<Value>,
}

impl fmt::Debug for RouteMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMount")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("guard", &self.guard.is_some())
            .field("openapi", &self.openapi.is_some())
            .finish_non_exhaustive()
    }
}

/// Namespaced routing capability.
///
/// The registration pipeline treats routing as opaque: it can carve a named
/// sub-surface out of a surface and mount a route chain on it. The actual
/// request/response wire protocol is owned by the adapter behind this port.
pub trait RoutingSurface: Send + Sync {
    /// Creates a private sub-surface scoped under the given path prefix.
    fn scope(&self, prefix: &str) -> Arc<dyn RoutingSurface>;

    /// Mounts a route chain on this surface.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] when the underlying routing facility rejects
    /// the mount.
    fn mount(&self, mount: RouteMount) -> RoutingResult<()>;
}

/// Errors returned by routing surface adapters.
#[derive(Debug, Clone, Error)]
pub enum RoutingError {
    /// A route is already mounted for the method and path.
    #[error("route already mounted: {method} {path}")]
    DuplicateRoute {
        /// Endpoint method.
        method: EndpointMethod,
        /// Conflicting mount path.
        path: String,
    },

    /// Routing-facility failure.
    #[error("routing surface error: {0}")]
    Surface(Arc<dyn std::error::Error + Send + Sync>),
}

impl RoutingError {
    /// Wraps a routing-facility failure.
    pub fn surface(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Surface(Arc::new(err))
    }
}
