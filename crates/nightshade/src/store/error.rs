//! Store errors.

use std::path::PathBuf;

/// Error returned when a [`PreferenceStore`](super::PreferenceStore) cannot
/// read or write its backing storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read preferences from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file could not be written.
    #[error("failed to write preferences to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file is not a JSON object of strings.
    #[error("invalid preferences file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
