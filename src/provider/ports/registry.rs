//! Name-keyed provider registry produced by registration.

use crate::provider::domain::{ProviderName, ProviderVersion};
use crate::provider::ports::provider::Provider;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One registered provider with its resolved metadata.
#[derive(Clone)]
pub struct RegistryEntry {
    name: ProviderName,
    version: ProviderVersion,
    locator: Option<String>,
    instance: Arc<dyn Provider>,
    registered_at: DateTime<Utc>,
}

impl RegistryEntry {
    /// Creates an entry stamped with the current clock time.
    #[must_use]
    pub fn new(
        name: ProviderName,
        version: ProviderVersion,
        locator: Option<String>,
        instance: Arc<dyn Provider>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            version,
            locator,
            instance,
            registered_at: clock.utc(),
        }
    }

    /// Returns the resolved registration name.
    #[must_use]
    pub const fn name(&self) -> &ProviderName {
        &self.name
    }

    /// Returns the resolved version.
    #[must_use]
    pub const fn version(&self) -> &ProviderVersion {
        &self.version
    }

    /// Returns the originating locator, when the provider was
    /// locator-resolved.
    #[must_use]
    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    /// Returns the live provider instance.
    #[must_use]
    pub const fn instance(&self) -> &Arc<dyn Provider> {
        &self.instance
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("locator", &self.locator)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}

/// Mapping from resolved provider name to registered provider.
///
/// The registry only stores: no validation lives here. Inserting an entry
/// under an existing name overwrites it, so among duplicate specifications
/// the last one in input order wins. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    entries: HashMap<ProviderName, RegistryEntry>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, overwriting any existing entry with the same name.
    pub fn insert(&mut self, entry: RegistryEntry) {
        self.entries.insert(entry.name().clone(), entry);
    }

    /// Returns the entry registered under the given name.
    #[must_use]
    pub fn get(&self, name: &ProviderName) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Looks up an entry by raw name string.
    ///
    /// Returns `None` for names that fail validation, since such names can
    /// never have been registered.
    #[must_use]
    pub fn get_by_str(&self, name: &str) -> Option<&RegistryEntry> {
        let parsed = ProviderName::new(name).ok()?;
        self.entries.get(&parsed)
    }

    /// Iterates over registered entries in unspecified order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Returns the registered provider names in unspecified order.
    #[must_use]
    pub fn names(&self) -> Vec<&ProviderName> {
        self.entries.keys().collect()
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
