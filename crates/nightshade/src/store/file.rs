//! JSON file store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

type Entries = BTreeMap<String, String>;

/// A store persisted as a JSON object in a single file.
///
/// Every [`load`](PreferenceStore::load) re-reads the file, and every
/// [`save`](PreferenceStore::save) re-reads it and merges the new entry
/// before rewriting it, so several handles (in one process or several) on the
/// same path see each other's writes and never drop each other's keys.
/// A missing file is an empty store; parent directories are created on the
/// first save.
///
/// ```json
/// { "theme": "dark" }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at `path`, checking that existing content is valid.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file exists but cannot be read, or
    /// [`StoreError::Parse`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.read_entries()?;
        Ok(store)
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json + "\n").map_err(write_err)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_save_creates_parents_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("theme", "dark").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"font": "mono"}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.save("theme", "light").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"font\": \"mono\""));
        assert!(content.contains("\"theme\": \"light\""));
    }

    #[test]
    fn test_load_sees_changes_made_after_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::open(&path).unwrap();

        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
