//! Shared fixtures for provider pipeline tests.

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use crate::provider::adapters::memory::{CapturingDiagnostics, InMemoryRouter};
use crate::provider::domain::{
    EndpointDecl, EndpointHandler, GuardDenial, HandlerRequest, HandlerResponse, RouteGuard,
};
use crate::provider::ports::{
    environment::HostEnv,
    provider::{Provider, SetupResult},
    registry::ProviderRegistry,
};
use async_trait::async_trait;

/// Setup behavior a [`StubProvider`] exhibits during registration.
pub(crate) enum SetupBehavior {
    /// Complete immediately.
    Noop,
    /// Fail with the given message.
    Fail(String),
    /// Sleep before completing, to exercise timeouts and interleaving.
    Delay(Duration),
    /// Write a value into the environment's state capability.
    RecordState(String, Value),
    /// Record whether a peer provider is visible in the shared registry.
    ProbePeer(String),
}

/// Configurable provider stub.
pub(crate) struct StubProvider {
    name: Option<String>,
    version: Option<String>,
    endpoints: Vec<EndpointDecl>,
    behavior: SetupBehavior,
}

impl StubProvider {
    pub(crate) fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            version: None,
            endpoints: Vec::new(),
            behavior: SetupBehavior::Noop,
        }
    }

    pub(crate) fn anonymous() -> Self {
        Self {
            name: None,
            version: None,
            endpoints: Vec::new(),
            behavior: SetupBehavior::Noop,
        }
    }

    pub(crate) fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_owned());
        self
    }

    pub(crate) fn with_endpoint(mut self, endpoint: EndpointDecl) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    pub(crate) fn with_setup(mut self, behavior: SetupBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub(crate) fn into_arc(self) -> Arc<dyn Provider> {
        Arc::new(self)
    }
}

#[async_trait]
impl Provider for StubProvider {
    fn declared_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn declared_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    async fn setup(&self, env: &HostEnv, registry: &ProviderRegistry) -> SetupResult {
        match &self.behavior {
            SetupBehavior::Noop => Ok(()),
            SetupBehavior::Fail(message) => Err(message.clone().into()),
            SetupBehavior::Delay(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(())
            }
            SetupBehavior::RecordState(key, value) => {
                let state = env.state().expect("stub requires a state capability");
                state.put(key.clone(), value.clone());
                Ok(())
            }
            SetupBehavior::ProbePeer(peer) => {
                let state = env.state().expect("stub requires a state capability");
                state.put(
                    format!("saw_{peer}"),
                    json!(registry.get_by_str(peer).is_some()),
                );
                Ok(())
            }
        }
    }

    fn endpoints(&self) -> Vec<EndpointDecl> {
        self.endpoints.clone()
    }
}

/// Handler returning `200` with the given payload.
pub(crate) fn ok_handler(body: Value) -> EndpointHandler {
    Arc::new(move |_request| Ok(HandlerResponse::ok(body.clone())))
}

/// Handler failing with the given message.
pub(crate) fn failing_handler(message: &str) -> EndpointHandler {
    let message = message.to_owned();
    Arc::new(move |_request| Err(message.clone().into()))
}

/// Handler that panics when invoked.
pub(crate) fn panicking_handler() -> EndpointHandler {
    Arc::new(|_request| panic!("stub handler exploded"))
}

/// Guard denying every request with the given status.
pub(crate) struct DenyAllGuard {
    pub status: u16,
    pub reason: String,
}

impl DenyAllGuard {
    pub(crate) fn new(status: u16, reason: &str) -> Arc<dyn RouteGuard> {
        Arc::new(Self {
            status,
            reason: reason.to_owned(),
        })
    }
}

impl RouteGuard for DenyAllGuard {
    fn authorize(&self, _request: &HandlerRequest) -> Result<(), GuardDenial> {
        Err(GuardDenial::new(self.status, self.reason.clone()))
    }
}

/// Environment bundle wired against in-memory adapters.
pub(crate) struct TestEnv {
    pub env: HostEnv,
    pub router: InMemoryRouter,
    pub diagnostics: CapturingDiagnostics,
}

/// Creates an environment over a fresh recording router and capturing
/// diagnostics sink.
pub(crate) fn test_env() -> TestEnv {
    let router = InMemoryRouter::new();
    let diagnostics = CapturingDiagnostics::new();
    let env = HostEnv::new(Arc::new(diagnostics.clone()), Arc::new(router.clone()));
    TestEnv {
        env,
        router,
        diagnostics,
    }
}
