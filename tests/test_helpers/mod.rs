//! Shared helpers for Switchboard integration tests.

#![allow(
    dead_code,
    reason = "Each integration test binary uses a different subset of these helpers"
)]

use serde_json::{Value, json};
use std::sync::Arc;

use async_trait::async_trait;
use switchboard::provider::domain::{
    EndpointDecl, EndpointHandler, GuardDenial, HandlerRequest, HandlerResponse, RouteGuard,
};
use switchboard::provider::ports::{
    environment::HostEnv,
    provider::{Provider, SetupResult},
    registry::ProviderRegistry,
};

/// Minimal provider for integration scenarios: optional name and version,
/// declared endpoints, optional state write or failure during setup.
pub struct ScenarioProvider {
    name: Option<String>,
    version: Option<String>,
    endpoints: Vec<EndpointDecl>,
    state_write: Option<(String, Value)>,
    fail_setup: Option<String>,
}

impl ScenarioProvider {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            version: None,
            endpoints: Vec::new(),
            state_write: None,
            fail_setup: None,
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            name: None,
            version: None,
            endpoints: Vec::new(),
            state_write: None,
            fail_setup: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_owned());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: EndpointDecl) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    #[must_use]
    pub fn writing_state(mut self, key: &str, value: Value) -> Self {
        self.state_write = Some((key.to_owned(), value));
        self
    }

    #[must_use]
    pub fn failing_setup(mut self, message: &str) -> Self {
        self.fail_setup = Some(message.to_owned());
        self
    }

    #[must_use]
    pub fn into_arc(self) -> Arc<dyn Provider> {
        Arc::new(self)
    }
}

#[async_trait]
impl Provider for ScenarioProvider {
    fn declared_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn declared_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    async fn setup(&self, env: &HostEnv, _registry: &ProviderRegistry) -> SetupResult {
        if let Some(message) = &self.fail_setup {
            return Err(message.clone().into());
        }
        if let Some((key, value)) = &self.state_write {
            let state = env.state().expect("scenario requires a state capability");
            state.put(key.clone(), value.clone());
        }
        Ok(())
    }

    fn endpoints(&self) -> Vec<EndpointDecl> {
        self.endpoints.clone()
    }
}

/// Handler answering `200` with the given payload.
#[must_use]
pub fn respond_with(body: Value) -> EndpointHandler {
    Arc::new(move |_request| Ok(HandlerResponse::ok(body.clone())))
}

/// Handler failing with the given message.
#[must_use]
pub fn fail_with(message: &str) -> EndpointHandler {
    let message = message.to_owned();
    Arc::new(move |_request| Err(message.clone().into()))
}

/// Guard admitting only requests carrying the expected bearer token in the
/// `authorization` header.
pub struct BearerGuard {
    token: String,
}

impl BearerGuard {
    #[must_use]
    pub fn new(token: &str) -> Arc<dyn RouteGuard> {
        Arc::new(Self {
            token: token.to_owned(),
        })
    }
}

impl RouteGuard for BearerGuard {
    fn authorize(&self, request: &HandlerRequest) -> Result<(), GuardDenial> {
        let expected = format!("Bearer {}", self.token);
        if request.headers.get("authorization") == Some(&expected) {
            Ok(())
        } else {
            Err(GuardDenial::new(401, "missing or invalid bearer token"))
        }
    }
}

/// Builds an authorized request for [`BearerGuard`]-guarded endpoints.
#[must_use]
pub fn authorized_request(path: &str, token: &str) -> HandlerRequest {
    let mut request = HandlerRequest::new(path);
    request
        .headers
        .insert("authorization".to_owned(), format!("Bearer {token}"));
    request.payload = json!(null);
    request
}
