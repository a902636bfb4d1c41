//! Endpoint declarations, handler types, and the security-guard contract.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Opaque request context passed to endpoint handlers and guards.
///
/// The registration layer does not own the HTTP wire protocol; this value
/// carries only what handler wrapping and guarding need: the requester's
/// origin, the matched path, headers, and an opaque JSON payload.
#[derive(Debug, Clone, Default)]
pub struct HandlerRequest {
    /// Requester origin (remote address or `Origin` header), when known.
    pub origin: Option<String>,
    /// Matched request path.
    pub path: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Opaque request payload.
    pub payload: Value,
}

impl HandlerRequest {
    /// Creates a request context for the given path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            origin: None,
            path: path.into(),
            headers: BTreeMap::new(),
            payload: Value::Null,
        }
    }

    /// Sets the requester origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the opaque request payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Response produced by an endpoint handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    /// HTTP status code.
    pub status: u16,
    /// Opaque response payload.
    pub body: Value,
}

impl HandlerResponse {
    /// Creates a response with the given status and payload.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Creates a `200 OK` response with the given payload.
    #[must_use]
    pub const fn ok(body: Value) -> Self {
        Self::new(200, body)
    }
}

/// Failure raised by an endpoint handler at request time.
pub type HandlerFailure = Box<dyn std::error::Error + Send + Sync>;

/// Synchronous endpoint handler callable.
pub type EndpointHandler =
    Arc<dyn Fn(&HandlerRequest) -> Result<HandlerResponse, HandlerFailure> + Send + Sync>;

/// Denial produced by a [`RouteGuard`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("request denied ({status}): {reason}")]
pub struct GuardDenial {
    /// HTTP status to surface, typically 401 or 403.
    pub status: u16,
    /// Human-readable denial reason.
    pub reason: String,
}

impl GuardDenial {
    /// Creates a denial with the given status and reason.
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// Security middleware contract applied ahead of wrapped handlers.
///
/// Guards run before the handler in a mount chain; a denial short-circuits
/// the request without invoking the handler.
pub trait RouteGuard: Send + Sync {
    /// Authorizes a request, returning a denial to short-circuit it.
    ///
    /// # Errors
    ///
    /// Returns [`GuardDenial`] when the request must not reach the handler.
    fn authorize(&self, request: &HandlerRequest) -> Result<(), GuardDenial>;
}

/// Endpoint-level security policy.
///
/// `Inherit` defers to the environment's ambient guard; `Disabled` opts the
/// endpoint out even when an ambient guard exists; `Custom` overrides the
/// ambient guard with an endpoint-specific one.
#[derive(Clone, Default)]
pub enum SecurityPolicy {
    /// Use the environment's ambient guard, if any.
    #[default]
    Inherit,
    /// Mount without any guard, overriding the ambient one.
    Disabled,
    /// Mount with an endpoint-specific guard.
    Custom(Arc<dyn RouteGuard>),
}

impl fmt::Debug for SecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("SecurityPolicy::Inherit"),
            Self::Disabled => f.write_str("SecurityPolicy::Disabled"),
            Self::Custom(_) => f.write_str("SecurityPolicy::Custom(..)"),
        }
    }
}

/// One endpoint declared by a provider.
///
/// Route and method are carried as raw strings and validated at
/// registration time, so a malformed declaration skips that endpoint with a
/// diagnostic instead of failing the provider.
#[derive(Clone)]
pub struct EndpointDecl {
    method: String,
    route: String,
    handler: EndpointHandler,
    openapi: Option<Value>,
    security: SecurityPolicy,
}

impl EndpointDecl {
    /// Creates an endpoint declaration for the given method and route.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        route: impl Into<String>,
        handler: EndpointHandler,
    ) -> Self {
        Self {
            method: method.into(),
            route: route.into(),
            handler,
            openapi: None,
            security: SecurityPolicy::Inherit,
        }
    }

    /// Attaches an opaque openapi fragment for documentation tooling.
    #[must_use]
    pub fn with_openapi(mut self, fragment: Value) -> Self {
        self.openapi = Some(fragment);
        self
    }

    /// Sets the endpoint security policy.
    #[must_use]
    pub fn with_security(mut self, policy: SecurityPolicy) -> Self {
        self.security = policy;
        self
    }

    /// Returns the declared method string.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the declared route string.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Returns the endpoint handler.
    #[must_use]
    pub const fn handler(&self) -> &EndpointHandler {
        &self.handler
    }

    /// Returns the attached openapi fragment, if any.
    #[must_use]
    pub const fn openapi(&self) -> Option<&Value> {
        self.openapi.as_ref()
    }

    /// Returns the endpoint security policy.
    #[must_use]
    pub const fn security(&self) -> &SecurityPolicy {
        &self.security
    }
}

impl fmt::Debug for EndpointDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDecl")
            .field("method", &self.method)
            .field("route", &self.route)
            .field("openapi", &self.openapi.is_some())
            .field("security", &self.security)
            .finish_non_exhaustive()
    }
}
