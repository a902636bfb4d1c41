//! Port contracts for provider registration and endpoint mounting.
//!
//! Ports define infrastructure-agnostic interfaces and the contracts
//! exchanged with host services: provider loading, the opaque routing
//! surface, diagnostics output, the provider contract itself, the
//! name-keyed registry, and the host environment.

pub mod diagnostics;
pub mod environment;
pub mod loader;
pub mod provider;
pub mod registry;
pub mod router;

pub use diagnostics::{DiagnosticLevel, DiagnosticsSink};
pub use environment::HostEnv;
pub use loader::{ProviderLoadError, ProviderLoadResult, ProviderLoader};
pub use provider::{Provider, SetupFailure, SetupResult};
pub use registry::{ProviderRegistry, RegistryEntry};
pub use router::{RouteMount, RoutingError, RoutingResult, RoutingSurface};
