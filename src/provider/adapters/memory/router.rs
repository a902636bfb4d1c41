//! In-memory routing surface recording mounted route chains.

use serde_json::{Value, json};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::provider::domain::{
    EndpointHandler, EndpointMethod, HandlerFailure, HandlerRequest, HandlerResponse, RouteGuard,
};
use crate::provider::ports::router::{RouteMount, RoutingError, RoutingResult, RoutingSurface};

/// One route chain recorded by the in-memory router.
#[derive(Clone)]
pub struct RecordedRoute {
    /// Scope prefix of the sub-surface the chain was mounted on, empty for
    /// the root surface.
    pub scope: String,
    /// Endpoint method.
    pub method: EndpointMethod,
    /// Final mount path.
    pub path: String,
    /// Guard placed ahead of the handler, if any.
    pub guard: Option<Arc<dyn RouteGuard>>,
    /// The mounted handler.
    pub handler: EndpointHandler,
    /// Attached openapi metadata, if any.
    pub openapi: Option<Value>,
}

impl fmt::Debug for RecordedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordedRoute")
            .field("scope", &self.scope)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("guard", &self.guard.is_some())
            .field("openapi", &self.openapi.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct RouteTable {
    routes: Vec<RecordedRoute>,
    scopes: Vec<String>,
}

/// In-memory routing surface.
///
/// Records every mount in a table shared between the root surface and all
/// sub-surfaces carved from it, and can dispatch recorded chains so tests
/// exercise guards and wrapped handlers end to end.
#[derive(Clone, Default)]
pub struct InMemoryRouter {
    table: Arc<RwLock<RouteTable>>,
    prefix: String,
}

impl InMemoryRouter {
    /// Creates an empty root surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded route, in mount order.
    #[must_use]
    pub fn routes(&self) -> Vec<RecordedRoute> {
        let table = match self.table.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        table.routes.clone()
    }

    /// Returns the scope prefixes carved from this router, in creation
    /// order.
    #[must_use]
    pub fn scopes(&self) -> Vec<String> {
        let table = match self.table.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        table.scopes.clone()
    }

    /// Returns the recorded route for a method and path, if one is mounted.
    #[must_use]
    pub fn find(&self, method: EndpointMethod, path: &str) -> Option<RecordedRoute> {
        self.routes()
            .into_iter()
            .find(|route| route.method == method && route.path == path)
    }

    /// Dispatches a request through the chain mounted for a method and
    /// path.
    ///
    /// Returns `None` when nothing is mounted there. A guard denial is
    /// rendered as a response carrying the denial status, without invoking
    /// the handler.
    ///
    /// # Errors
    ///
    /// The inner result carries the handler's own failure; wrapped handlers
    /// never produce one.
    #[must_use]
    pub fn dispatch(
        &self,
        method: EndpointMethod,
        path: &str,
        request: &HandlerRequest,
    ) -> Option<Result<HandlerResponse, HandlerFailure>> {
        let route = self.find(method, path)?;

        if let Some(guard) = &route.guard
            && let Err(denial) = guard.authorize(request)
        {
            return Some(Ok(HandlerResponse::new(
                denial.status,
                json!({ "error": denial.reason }),
            )));
        }

        Some((route.handler)(request))
    }
}

impl RoutingSurface for InMemoryRouter {
    fn scope(&self, prefix: &str) -> Arc<dyn RoutingSurface> {
        {
            let mut table = match self.table.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            table.scopes.push(prefix.to_owned());
        }
        Arc::new(Self {
            table: Arc::clone(&self.table),
            prefix: prefix.to_owned(),
        })
    }

    fn mount(&self, mount: RouteMount) -> RoutingResult<()> {
        let mut table = self.table.write().map_err(|err| {
            RoutingError::surface(std::io::Error::other(err.to_string()))
        })?;

        let conflict = table
            .routes
            .iter()
            .any(|route| route.method == mount.method && route.path == mount.path);
        if conflict {
            return Err(RoutingError::DuplicateRoute {
                method: mount.method,
                path: mount.path,
            });
        }

        table.routes.push(RecordedRoute {
            scope: self.prefix.clone(),
            method: mount.method,
            path: mount.path,
            guard: mount.guard,
            handler: mount.handler,
            openapi: mount.openapi,
        });
        Ok(())
    }
}
