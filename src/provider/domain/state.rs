//! Opaque shared-state capability forwarded into provider environments.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Opaque per-scope key-value capability.
///
/// Hosts attach a handle to their environment; every provider registered
/// through that environment shares the same handle by reference. Handles
/// created independently are fully isolated from one another.
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl StateHandle {
    /// Creates an empty state handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under the given key.
    ///
    /// Lock poisoning is absorbed: a poisoned map is still written through.
    pub fn put(&self, key: impl Into<String>, value: Value) {
        let mut values = match self.values.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.into(), value);
    }

    /// Returns a clone of the value stored under the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let values = match self.values.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.get(key).cloned()
    }

    /// Returns true when no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let values = match self.values.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.is_empty()
    }
}
