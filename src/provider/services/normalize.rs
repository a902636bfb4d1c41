//! Specification normalization: heterogeneous inputs to uniform records.

use std::sync::Arc;

use crate::provider::ports::{
    diagnostics::{DiagnosticLevel, DiagnosticsSink},
    loader::ProviderLoader,
    provider::Provider,
};
use crate::provider::services::spec::{ProviderSpec, SpecSource};

/// Uniform internal record produced from one specification.
pub(crate) struct NormalizedSpec {
    /// Registration-name override from the descriptor, if any.
    pub override_name: Option<String>,
    /// Locator the instance was resolved from, if any.
    pub locator: Option<String>,
    /// The live provider instance.
    pub instance: Arc<dyn Provider>,
}

/// Normalizes one specification, resolving locators through the loader.
///
/// Invalid shapes and loader failures are tolerated: the spec is dropped
/// with a diagnostic and `None` is returned so the batch continues.
pub(crate) async fn normalize_spec<L: ProviderLoader>(
    loader: &L,
    diagnostics: &dyn DiagnosticsSink,
    spec: ProviderSpec,
) -> Option<NormalizedSpec> {
    match spec {
        ProviderSpec::Locator(locator) => {
            resolve_locator(loader, diagnostics, None, locator).await
        }
        ProviderSpec::Descriptor(descriptor) => {
            let override_name = descriptor.name().map(ToOwned::to_owned);
            match descriptor.source() {
                Some(SpecSource::Instance(instance)) => Some(NormalizedSpec {
                    override_name,
                    locator: None,
                    instance: Arc::clone(instance),
                }),
                Some(SpecSource::Locator(locator)) => {
                    resolve_locator(loader, diagnostics, override_name, locator.clone()).await
                }
                None => {
                    diagnostics.log(
                        DiagnosticLevel::Warn,
                        "dropping provider spec: descriptor carries neither a locator nor an instance",
                    );
                    None
                }
            }
        }
    }
}

async fn resolve_locator<L: ProviderLoader>(
    loader: &L,
    diagnostics: &dyn DiagnosticsSink,
    override_name: Option<String>,
    locator: String,
) -> Option<NormalizedSpec> {
    match loader.load(&locator).await {
        Ok(instance) => Some(NormalizedSpec {
            override_name,
            locator: Some(locator),
            instance,
        }),
        Err(err) => {
            diagnostics.log(
                DiagnosticLevel::Warn,
                &format!("dropping provider spec for locator '{locator}': {err}"),
            );
            None
        }
    }
}
