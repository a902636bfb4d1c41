//! Provider specification input shapes.

use crate::provider::ports::provider::Provider;
use std::fmt;
use std::sync::Arc;

/// Source a descriptor resolves its provider from.
///
/// Exactly one resolution path is taken per descriptor: an opaque locator
/// handed to the loader port, or an already-resolved instance used
/// directly.
#[derive(Clone)]
pub enum SpecSource {
    /// Opaque key resolved through the loader port.
    Locator(String),
    /// Pre-resolved provider instance.
    Instance(Arc<dyn Provider>),
}

impl fmt::Debug for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locator(locator) => f.debug_tuple("Locator").field(locator).finish(),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

/// Descriptor specification: an optional registration-name override plus an
/// optional provider source.
///
/// A descriptor without a source has no way to produce a provider; the
/// pipeline drops it with a diagnostic.
#[derive(Debug, Clone, Default)]
pub struct SpecDescriptor {
    name: Option<String>,
    source: Option<SpecSource>,
}

impl SpecDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registration-name override.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a locator source.
    #[must_use]
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.source = Some(SpecSource::Locator(locator.into()));
        self
    }

    /// Sets a pre-resolved instance source.
    #[must_use]
    pub fn with_instance(mut self, instance: Arc<dyn Provider>) -> Self {
        self.source = Some(SpecSource::Instance(instance));
        self
    }

    /// Returns the registration-name override, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the provider source, if any.
    #[must_use]
    pub const fn source(&self) -> Option<&SpecSource> {
        self.source.as_ref()
    }
}

/// One caller-supplied provider specification.
#[derive(Debug, Clone)]
pub enum ProviderSpec {
    /// Bare locator, resolved through the loader port.
    Locator(String),
    /// Descriptor with an optional name override and a provider source.
    Descriptor(SpecDescriptor),
}

impl ProviderSpec {
    /// Creates a bare locator specification.
    #[must_use]
    pub fn locator(value: impl Into<String>) -> Self {
        Self::Locator(value.into())
    }

    /// Creates a descriptor wrapping a pre-resolved instance.
    #[must_use]
    pub fn instance(instance: Arc<dyn Provider>) -> Self {
        Self::Descriptor(SpecDescriptor::new().with_instance(instance))
    }
}

impl From<SpecDescriptor> for ProviderSpec {
    fn from(descriptor: SpecDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Ordered batch of provider specifications.
///
/// A single specification auto-wraps into a one-element batch; an absent
/// input is the empty batch, which registration treats as a no-op.
#[derive(Debug, Clone, Default)]
pub struct SpecBatch {
    specs: Vec<ProviderSpec>,
}

impl SpecBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Consumes the batch, yielding its specifications in input order.
    #[must_use]
    pub fn into_specs(self) -> Vec<ProviderSpec> {
        self.specs
    }

    /// Returns true when the batch holds no specifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl From<ProviderSpec> for SpecBatch {
    fn from(spec: ProviderSpec) -> Self {
        Self { specs: vec![spec] }
    }
}

impl From<SpecDescriptor> for SpecBatch {
    fn from(descriptor: SpecDescriptor) -> Self {
        Self::from(ProviderSpec::from(descriptor))
    }
}

impl From<Vec<ProviderSpec>> for SpecBatch {
    fn from(specs: Vec<ProviderSpec>) -> Self {
        Self { specs }
    }
}

impl FromIterator<ProviderSpec> for SpecBatch {
    fn from_iter<I: IntoIterator<Item = ProviderSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}
