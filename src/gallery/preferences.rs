// SPDX-License-Identifier: MPL-2.0
//! String key/value preference storage.
//!
//! The gallery keeps two small pieces of state across sessions: the active
//! view mode and the visitor count. Both go through [`PreferenceStore`] so
//! the logic using them can run against [`MemoryStore`] in tests and against
//! the on-disk [`PersistedState`](crate::app::persisted_state::PersistedState)
//! in the application.

use crate::error::Result;
use std::collections::BTreeMap;

/// Per-user string preferences.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used for tests and when no data directory is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        assert!(store.get("view-mode").is_none());

        store.set("view-mode", "list").unwrap();
        store.set("view-mode", "grid").unwrap();

        assert_eq!(store.get("view-mode").as_deref(), Some("grid"));
        assert_eq!(store.len(), 1);
    }
}
