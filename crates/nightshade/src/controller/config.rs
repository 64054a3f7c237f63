//! Controller configuration.

use crate::store::DEFAULT_STORAGE_KEY;

/// Settings for a [`ThemeController`](super::ThemeController).
///
/// # Example
///
/// ```rust
/// use nightshade::ControllerConfig;
///
/// let config = ControllerConfig::new().storage_key("editor-theme");
/// assert_eq!(config.key(), "editor-theme");
/// assert_eq!(ControllerConfig::default().key(), "theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    storage_key: String,
}

impl ControllerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Sets the key the preference is stored under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Returns the key the preference is stored under.
    pub fn key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
