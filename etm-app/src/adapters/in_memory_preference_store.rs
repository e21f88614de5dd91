//! In-memory preference store.

use std::collections::HashMap;
use std::sync::RwLock;

use etm_core::error::CoreResult;
use etm_core::traits::{PreferenceStore, PreferencesMap};
use etm_core::types::PreferenceValue;

use super::poisoned;

/// Preference store kept in process memory.
pub struct InMemoryPreferenceStore {
    entries: RwLock<PreferencesMap>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Seed the store from existing entries.
    #[must_use]
    pub fn with_entries(entries: PreferencesMap) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn put(&self, key: &str, value: impl Into<PreferenceValue>) -> CoreResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.into());
        Ok(())
    }

    /// Remove an entry, returning its previous value.
    pub fn remove(&self, key: &str) -> CoreResult<Option<PreferenceValue>> {
        Ok(self.entries.write().map_err(poisoned)?.remove(key))
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_all(&self) -> CoreResult<PreferencesMap> {
        Ok(self.entries.read().map_err(poisoned)?.clone())
    }
}
