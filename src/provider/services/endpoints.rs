//! Endpoint validation, handler wrapping, and mounting.

use serde_json::json;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use uuid::Uuid;

use crate::provider::domain::{
    EndpointDecl, EndpointHandler, EndpointMethod, HandlerResponse, RouteGuard, RoutePath,
    SecurityPolicy,
};
use crate::provider::ports::{
    diagnostics::{DiagnosticLevel, DiagnosticsSink},
    router::RouteMount,
};
use crate::provider::services::setup::PreparedProvider;

/// Validates and mounts every endpoint a prepared provider declares.
///
/// Endpoints pass through sequential gates (route shape, then method); each
/// gate skips the endpoint with a diagnostic on failure and sibling
/// endpoints continue. Past the gates, mounting is unconditional: streaming
/// endpoints mount raw, all others mount a failure-containing wrapper
/// behind the selected security guard.
pub(crate) fn register_endpoints(provider: &PreparedProvider) {
    let diagnostics = provider.env.diagnostics();
    let name = provider.name.as_str();

    for endpoint in provider.instance.endpoints() {
        let Ok(route) = RoutePath::new(endpoint.route()) else {
            diagnostics.log(
                DiagnosticLevel::Warn,
                &format!(
                    "skipping endpoint '{}' on provider '{name}': route '{}' must be empty or match '/segment(/segment)*'",
                    endpoint.method(),
                    endpoint.route(),
                ),
            );
            continue;
        };

        let Ok(method) = endpoint.method().parse::<EndpointMethod>() else {
            diagnostics.log(
                DiagnosticLevel::Warn,
                &format!(
                    "skipping endpoint '{}' on provider '{name}': unrecognized method '{}'",
                    endpoint.route(),
                    endpoint.method(),
                ),
            );
            continue;
        };

        let mount_path = format!("/{name}{route}");
        let mount = if method.is_streaming() {
            streaming_mount(diagnostics.as_ref(), name, &endpoint, method, mount_path)
        } else {
            wrapped_mount(provider, &endpoint, method, mount_path)
        };

        let mounted_path = mount.path.clone();
        if let Err(err) = provider.env.router().mount(mount) {
            diagnostics.log(
                DiagnosticLevel::Warn,
                &format!("failed to mount {method} {mounted_path} on provider '{name}': {err}"),
            );
        }
    }
}

/// Builds a raw streaming mount: no wrapping, no guard, no openapi
/// metadata. The streaming transport does not support the wrapping path.
fn streaming_mount(
    diagnostics: &dyn DiagnosticsSink,
    name: &str,
    endpoint: &EndpointDecl,
    method: EndpointMethod,
    path: String,
) -> RouteMount {
    if endpoint.openapi().is_some() {
        diagnostics.log(
            DiagnosticLevel::Debug,
            &format!("ignoring openapi fragment on streaming endpoint {path} of provider '{name}'"),
        );
    }
    RouteMount {
        method,
        path,
        guard: None,
        handler: Arc::clone(endpoint.handler()),
        openapi: None,
    }
}

/// Builds a guarded, failure-containing mount for a non-streaming endpoint.
fn wrapped_mount(
    provider: &PreparedProvider,
    endpoint: &EndpointDecl,
    method: EndpointMethod,
    path: String,
) -> RouteMount {
    let guard: Option<Arc<dyn RouteGuard>> = match endpoint.security() {
        SecurityPolicy::Custom(custom) => Some(Arc::clone(custom)),
        SecurityPolicy::Disabled => None,
        SecurityPolicy::Inherit => provider.env.security().cloned(),
    };

    RouteMount {
        method,
        path,
        guard,
        handler: wrap_handler(
            Arc::clone(provider.env.diagnostics()),
            Arc::clone(endpoint.handler()),
        ),
        openapi: endpoint.openapi().cloned(),
    }
}

/// Wraps a handler so a request-time failure cannot escape the mount chain.
///
/// Failures and panics are assigned a fresh correlation identifier, logged
/// at error severity with the requester's origin and at debug severity with
/// a structured dump, and answered with a generic 500 carrying the
/// identifier.
fn wrap_handler(diagnostics: Arc<dyn DiagnosticsSink>, inner: EndpointHandler) -> EndpointHandler {
    Arc::new(move |request| {
        let failure = match panic::catch_unwind(AssertUnwindSafe(|| inner(request))) {
            Ok(Ok(response)) => return Ok(response),
            Ok(Err(failure)) => format!("{failure:?}"),
            Err(payload) => panic_message(payload.as_ref()),
        };

        let correlation = Uuid::new_v4();
        let origin = request.origin.as_deref().unwrap_or("unknown origin");
        diagnostics.log(
            DiagnosticLevel::Error,
            &format!("endpoint handler failed (correlation {correlation}), request from {origin}"),
        );
        diagnostics.log(
            DiagnosticLevel::Debug,
            &format!("handler failure {correlation}: {failure}"),
        );

        Ok(HandlerResponse::new(
            500,
            json!({
                "error": "internal server error",
                "correlation_id": correlation.to_string(),
            }),
        ))
    })
}

/// Renders a panic payload into a loggable message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    message.map_or_else(
        || "handler panicked with a non-string payload".to_owned(),
        |text| format!("handler panicked: {text}"),
    )
}
