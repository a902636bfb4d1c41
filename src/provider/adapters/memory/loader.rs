//! Static provider table: the registration-table loader adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::ports::{
    loader::{ProviderLoadError, ProviderLoadResult, ProviderLoader},
    provider::Provider,
};

/// Factory producing a provider instance for a registered locator.
pub type ProviderFactory = Arc<dyn Fn() -> Arc<dyn Provider> + Send + Sync>;

struct TableEntry {
    factory: ProviderFactory,
    manifest_version: Option<String>,
}

/// Build-time provider registration table.
///
/// Hosts that compile their providers in register each one here under an
/// opaque locator key, optionally alongside the version its package
/// manifest declares. This replaces string-keyed dynamic module loading
/// with an explicit table supplied at process start.
#[derive(Clone, Default)]
pub struct StaticProviderTable {
    entries: HashMap<String, Arc<TableEntry>>,
}

impl StaticProviderTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pre-built instance under a locator.
    #[must_use]
    pub fn with_instance(self, locator: impl Into<String>, instance: Arc<dyn Provider>) -> Self {
        self.with_factory(locator, move || Arc::clone(&instance))
    }

    /// Registers a factory under a locator.
    #[must_use]
    pub fn with_factory(
        mut self,
        locator: impl Into<String>,
        factory: impl Fn() -> Arc<dyn Provider> + Send + Sync + 'static,
    ) -> Self {
        self.entries.insert(
            locator.into(),
            Arc::new(TableEntry {
                factory: Arc::new(factory),
                manifest_version: None,
            }),
        );
        self
    }

    /// Records the manifest version for an already-registered locator.
    ///
    /// Unknown locators are ignored; the loader reports them at load time.
    #[must_use]
    pub fn with_manifest_version(
        mut self,
        locator: &str,
        version: impl Into<String>,
    ) -> Self {
        if let Some(entry) = self.entries.get(locator) {
            let updated = TableEntry {
                factory: Arc::clone(&entry.factory),
                manifest_version: Some(version.into()),
            };
            self.entries.insert(locator.to_owned(), Arc::new(updated));
        }
        self
    }
}

#[async_trait]
impl ProviderLoader for StaticProviderTable {
    async fn load(&self, locator: &str) -> ProviderLoadResult<Arc<dyn Provider>> {
        let entry = self
            .entries
            .get(locator)
            .ok_or_else(|| ProviderLoadError::UnknownLocator(locator.to_owned()))?;
        Ok((entry.factory)())
    }

    async fn manifest_version(&self, locator: &str) -> ProviderLoadResult<Option<String>> {
        let entry = self
            .entries
            .get(locator)
            .ok_or_else(|| ProviderLoadError::UnknownLocator(locator.to_owned()))?;
        Ok(entry.manifest_version.clone())
    }
}
