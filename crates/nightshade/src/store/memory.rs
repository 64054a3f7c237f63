//! In-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{PreferenceStore, StoreError};

/// A store kept in process memory.
///
/// Clones share the same entries, which models several hosts on one origin
/// reading the same storage: a controller built later on a clone sees what an
/// earlier controller saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the store for chaining.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Writes an entry directly, bypassing the controller.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns a copy of the value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load("theme").unwrap(), None);

        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));

        store.save("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Some("light".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut other = store.clone();
        other.save("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }
}
