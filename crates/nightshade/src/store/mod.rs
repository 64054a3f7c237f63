//! Persistence for the stored theme preference.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: Key-value persistence port used by the controller
//! - [`MemoryStore`]: Shared in-process store, the test double
//! - [`FileStore`]: JSON file store for hosts that outlive a single process
//! - [`StoreError`]: Read, write and parse failures

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the theme preference is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// A persistent string key-value store.
///
/// Values written through one handle must be visible to every later
/// [`load`](Self::load) on a store backed by the same storage.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}
