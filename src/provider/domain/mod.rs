//! Domain model for provider registration and endpoint declaration.
//!
//! The provider domain models validated names, versions, routes and
//! methods, endpoint declarations with their security policy, and the
//! opaque shared-state capability. All infrastructure concerns are kept
//! outside the domain boundary.

mod endpoint;
mod error;
mod method;
mod name;
mod route;
mod state;
mod version;

pub use endpoint::{
    EndpointDecl, EndpointHandler, GuardDenial, HandlerFailure, HandlerRequest, HandlerResponse,
    RouteGuard, SecurityPolicy,
};
pub use error::{ParseMethodError, ProviderDomainError};
pub use method::EndpointMethod;
pub use name::ProviderName;
pub use route::RoutePath;
pub use state::StateHandle;
pub use version::ProviderVersion;
