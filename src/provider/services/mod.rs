//! Application services for provider registration and endpoint mounting.

mod endpoints;
mod naming;
mod normalize;
mod registration;
mod setup;
mod spec;
mod versioning;

pub use registration::{ProviderRegistrationService, RegistrationError, RegistrationResult};
pub use spec::{ProviderSpec, SpecBatch, SpecDescriptor, SpecSource};
