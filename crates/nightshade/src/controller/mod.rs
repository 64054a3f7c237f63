//! The theme controller.
//!
//! [`ThemeController`] owns the applied theme for one host. It is built once,
//! resolves the effective theme (stored preference first, system preference
//! otherwise), applies it, and from then on reacts to two kinds of events:
//!
//! - manual choices ([`toggle`](ThemeController::toggle) and
//!   [`set_theme`](ThemeController::set_theme)), which are persisted
//! - system preference changes
//!   ([`system_preference_changed`](ThemeController::system_preference_changed)),
//!   which only apply while no manual choice is stored
//!
//! Every path goes through one private mutation routine that updates the
//! surface marker, the glyph, the store and the listeners in that order, so
//! the marker and the icon never disagree.
//!
//! # Example
//!
//! ```rust
//! use nightshade::{FixedSignal, MemoryStore, MemorySurface, Theme, ThemeController};
//!
//! let signal = FixedSignal::new(Theme::Light);
//! let store = MemoryStore::new();
//! let mut controller =
//!     ThemeController::init(MemorySurface::new(), store.clone(), signal.clone()).unwrap();
//! assert_eq!(controller.theme(), Theme::Light);
//!
//! controller.toggle();
//! assert_eq!(controller.theme(), Theme::Dark);
//! assert_eq!(store.get("theme").as_deref(), Some("dark"));
//!
//! // The manual choice wins over later system changes.
//! signal.set(Theme::Light);
//! controller.sync_with_signal();
//! assert_eq!(controller.theme(), Theme::Dark);
//! ```

mod config;
mod error;
mod listeners;

pub use config::ControllerConfig;
pub use error::SetupError;
pub use listeners::ListenerId;

use tracing::{debug, warn};

use crate::signal::PreferenceSignal;
use crate::store::PreferenceStore;
use crate::surface::Surface;
use crate::theme::Theme;
use listeners::Listeners;

/// Where the effective theme comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// A manual choice persisted in the store.
    Stored,
    /// The host's system preference.
    System,
}

impl ThemeSource {
    /// Returns a lowercase label for display.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSource::Stored => "stored",
            ThemeSource::System => "system",
        }
    }
}

impl std::fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a theme is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// `toggle` or `set_theme`.
    Manual,
    /// Read back from the store at initialization.
    Restored,
    /// Taken from the system preference.
    System,
}

/// Resolves, applies, persists and broadcasts the display theme.
///
/// The controller is generic over its three ports so it can run against a
/// real host or against the in-memory doubles ([`MemorySurface`],
/// [`MemoryStore`], [`FixedSignal`]).
///
/// [`MemorySurface`]: crate::MemorySurface
/// [`MemoryStore`]: crate::MemoryStore
/// [`FixedSignal`]: crate::FixedSignal
pub struct ThemeController<S, P, G> {
    surface: S,
    store: P,
    signal: G,
    config: ControllerConfig,
    listeners: Listeners,
}

impl<S, P, G> std::fmt::Debug for ThemeController<S, P, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S, P, G> ThemeController<S, P, G>
where
    S: Surface,
    P: PreferenceStore,
    G: PreferenceSignal,
{
    /// Initializes a controller with the default configuration.
    ///
    /// Returns `None` and logs a warning if the surface lacks its toggle
    /// control or icon; the surface is left untouched in that case.
    pub fn init(surface: S, store: P, signal: G) -> Option<Self> {
        Self::init_with_config(ControllerConfig::default(), surface, store, signal)
    }

    /// Initializes a controller with an explicit configuration.
    ///
    /// Behaves like [`init`](Self::init).
    pub fn init_with_config(
        config: ControllerConfig,
        surface: S,
        store: P,
        signal: G,
    ) -> Option<Self> {
        match Self::try_init(config, surface, store, signal) {
            Ok(controller) => Some(controller),
            Err(err) => {
                warn!("{err}; theme controller disabled");
                None
            }
        }
    }

    /// Initializes a controller, reporting a missing surface element.
    ///
    /// On success the effective theme has been applied exactly once and no
    /// listener is registered yet.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the surface has no toggle control or no
    /// icon. Nothing is written to the surface or the store.
    pub fn try_init(
        config: ControllerConfig,
        surface: S,
        store: P,
        signal: G,
    ) -> Result<Self, SetupError> {
        if !surface.has_toggle_control() {
            return Err(SetupError::MissingToggleControl);
        }
        if !surface.has_icon() {
            return Err(SetupError::MissingIcon);
        }

        let mut controller = Self {
            surface,
            store,
            signal,
            config,
            listeners: Listeners::default(),
        };
        let (theme, source) = controller.resolve();
        let origin = match source {
            ThemeSource::Stored => Origin::Restored,
            ThemeSource::System => Origin::System,
        };
        controller.apply(theme, origin);
        Ok(controller)
    }

    /// Returns the stored preference if present, otherwise the system one.
    pub fn resolve_effective_theme(&self) -> Theme {
        self.resolve().0
    }

    /// Returns where [`resolve_effective_theme`](Self::resolve_effective_theme)
    /// would take its answer from right now.
    pub fn source(&self) -> ThemeSource {
        self.resolve().1
    }

    /// Returns the stored preference, if a valid one exists.
    ///
    /// Unrecognized stored text and store read failures count as "no
    /// preference"; both are logged.
    pub fn stored_preference(&self) -> Option<Theme> {
        let key = self.config.key();
        let value = match self.store.load(key) {
            Ok(value) => value?,
            Err(err) => {
                warn!(key, error = %err, "could not read stored theme preference");
                return None;
            }
        };
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!(key, error = %err, "ignoring stored theme preference");
                None
            }
        }
    }

    /// Returns the applied theme, as shown by the surface marker.
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.surface.is_dark())
    }

    /// Applies `theme` as a manual choice and persists it.
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply(theme, Origin::Manual);
    }

    /// Switches to the complement of the applied theme and persists it.
    ///
    /// Returns the newly applied theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme().complement();
        self.set_theme(next);
        next
    }

    /// Handles a change of the host's system preference.
    ///
    /// The new system theme is applied only while no manual choice is stored.
    /// Returns `true` if it was applied.
    pub fn system_preference_changed(&mut self, system: Theme) -> bool {
        if let Some(stored) = self.stored_preference() {
            debug!(%system, %stored, "system theme change ignored, stored preference wins");
            return false;
        }
        self.apply(system, Origin::System);
        true
    }

    /// Re-reads the injected signal and handles it as a system change.
    pub fn sync_with_signal(&mut self) -> bool {
        let system = self.signal.system_theme();
        self.system_preference_changed(system)
    }

    /// Registers a listener called with the new theme on every apply.
    ///
    /// Listeners run in registration order, each exactly once per apply.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Theme) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the store.
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Returns the system preference signal.
    pub fn signal(&self) -> &G {
        &self.signal
    }

    /// Consumes the controller, returning its ports.
    pub fn into_parts(self) -> (S, P, G) {
        (self.surface, self.store, self.signal)
    }

    fn resolve(&self) -> (Theme, ThemeSource) {
        match self.stored_preference() {
            Some(theme) => (theme, ThemeSource::Stored),
            None => (self.signal.system_theme(), ThemeSource::System),
        }
    }

    // Only manual choices are persisted: a theme taken from the system must
    // not turn into a stored preference, or live system changes would stop
    // applying after the first run. A restored value is already stored.
    fn apply(&mut self, theme: Theme, origin: Origin) {
        self.surface.set_dark(theme.is_dark());
        self.surface.set_glyph(theme.glyph());

        if origin == Origin::Manual {
            let key = self.config.key();
            if let Err(err) = self.store.save(key, theme.as_str()) {
                warn!(key, error = %err, "could not persist theme preference");
            }
        }

        debug!(%theme, ?origin, "applied theme");
        self.listeners.notify(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedSignal;
    use crate::store::{MemoryStore, StoreError};
    use crate::surface::MemorySurface;
    use crate::theme::Glyph;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Read {
                path: PathBuf::from("broken"),
                source: io::Error::other("unavailable"),
            })
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                path: PathBuf::from("broken"),
                source: io::Error::other("unavailable"),
            })
        }
    }

    /// Memory store that counts writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        saves: usize,
    }

    impl PreferenceStore for CountingStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.saves += 1;
            self.inner.save(key, value)
        }
    }

    fn controller(
        store: MemoryStore,
        system: Theme,
    ) -> ThemeController<MemorySurface, MemoryStore, FixedSignal> {
        ThemeController::init(MemorySurface::new(), store, FixedSignal::new(system)).unwrap()
    }

    #[test]
    fn test_init_uses_system_when_nothing_stored() {
        let store = MemoryStore::new();
        let c = controller(store.clone(), Theme::Dark);

        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.surface().glyph(), Some(Glyph::Sun));
        assert_eq!(c.source(), ThemeSource::System);
        assert!(store.is_empty());
    }

    #[test]
    fn test_init_prefers_stored_over_system() {
        let store = MemoryStore::new().with("theme", "light");
        let c = controller(store, Theme::Dark);

        assert_eq!(c.theme(), Theme::Light);
        assert_eq!(c.surface().glyph(), Some(Glyph::Moon));
        assert_eq!(c.source(), ThemeSource::Stored);
    }

    #[test]
    fn test_init_from_stored_value_does_not_rewrite_it() {
        let store = CountingStore {
            inner: MemoryStore::new().with("theme", "dark"),
            saves: 0,
        };
        let mut c =
            ThemeController::init(MemorySurface::new(), store, FixedSignal::new(Theme::Light))
                .unwrap();
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.store().saves, 0);

        c.toggle();
        assert_eq!(c.store().saves, 1);
    }

    #[test]
    fn test_init_from_system_writes_nothing() {
        let c = ThemeController::init(
            MemorySurface::new(),
            CountingStore::default(),
            FixedSignal::new(Theme::Dark),
        )
        .unwrap();
        assert_eq!(c.store().saves, 0);
    }

    #[test]
    fn test_init_applies_exactly_once() {
        let c = controller(MemoryStore::new(), Theme::Light);
        // One marker write plus one glyph write.
        assert_eq!(c.surface().mutations(), 2);
    }

    #[test]
    fn test_corrupted_stored_value_falls_back_to_system() {
        let store = MemoryStore::new().with("theme", "purple");
        let c = controller(store.clone(), Theme::Dark);

        assert_eq!(c.stored_preference(), None);
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.source(), ThemeSource::System);
        assert_eq!(store.get("theme").as_deref(), Some("purple"));
    }

    #[test]
    fn test_corrupted_stored_value_lets_system_changes_through() {
        let store = MemoryStore::new().with("theme", "DARK");
        let mut c = controller(store, Theme::Light);
        assert!(c.system_preference_changed(Theme::Dark));
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new().with("theme", "dark");
        let config = ControllerConfig::new().storage_key("tools-theme");
        let mut c = ThemeController::init_with_config(
            config,
            MemorySurface::new(),
            store.clone(),
            FixedSignal::new(Theme::Light),
        )
        .unwrap();

        assert_eq!(c.theme(), Theme::Light);
        c.toggle();
        assert_eq!(store.get("tools-theme").as_deref(), Some("dark"));
        assert_eq!(c.config().key(), "tools-theme");
    }

    #[test]
    fn test_missing_toggle_control() {
        let mut surface = MemorySurface::without_toggle_control();
        let err = ThemeController::try_init(
            ControllerConfig::default(),
            &mut surface,
            MemoryStore::new(),
            FixedSignal::new(Theme::Dark),
        )
        .unwrap_err();

        assert_eq!(err, SetupError::MissingToggleControl);
        assert_eq!(surface.mutations(), 0);
    }

    #[test]
    fn test_missing_icon_is_silent_noop() {
        let mut surface = MemorySurface::without_icon();
        let store = MemoryStore::new();
        let initialized =
            ThemeController::init(&mut surface, store.clone(), FixedSignal::new(Theme::Dark))
                .is_some();

        assert!(!initialized);
        assert_eq!(surface.mutations(), 0);
        assert!(!surface.is_dark());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_failures_do_not_block_apply() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut c = ThemeController::init(
            MemorySurface::new(),
            BrokenStore,
            FixedSignal::new(Theme::Light),
        )
        .unwrap();
        let sink = Rc::clone(&seen);
        c.subscribe(move |t| sink.borrow_mut().push(t));

        assert_eq!(c.toggle(), Theme::Dark);
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.surface().glyph(), Some(Glyph::Sun));
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
        // Unreadable store counts as no preference, so the system still applies.
        assert!(c.system_preference_changed(Theme::Light));
    }

    #[test]
    fn test_listener_called_once_per_apply() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut c = controller(MemoryStore::new(), Theme::Light);
        let sink = Rc::clone(&seen);
        c.subscribe(move |t| sink.borrow_mut().push(t));

        c.set_theme(Theme::Dark);
        c.set_theme(Theme::Dark);
        c.toggle();
        c.system_preference_changed(Theme::Dark);

        assert_eq!(
            *seen.borrow(),
            vec![Theme::Dark, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut c = controller(MemoryStore::new(), Theme::Light);
        let sink = Rc::clone(&count);
        let id = c.subscribe(move |_| *sink.borrow_mut() += 1);

        c.toggle();
        assert!(c.unsubscribe(id));
        c.toggle();

        assert_eq!(*count.borrow(), 1);
        assert!(!c.unsubscribe(id));
    }

    #[test]
    fn test_sync_with_signal_reads_injected_signal() {
        let signal = FixedSignal::new(Theme::Light);
        let mut c =
            ThemeController::init(MemorySurface::new(), MemoryStore::new(), signal.clone())
                .unwrap();

        signal.set(Theme::Dark);
        assert!(c.sync_with_signal());
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn test_into_parts_returns_ports() {
        let mut c = controller(MemoryStore::new(), Theme::Light);
        c.set_theme(Theme::Dark);
        let (surface, store, _signal) = c.into_parts();
        assert!(surface.is_dark());
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_theme_source_display() {
        assert_eq!(ThemeSource::Stored.to_string(), "stored");
        assert_eq!(ThemeSource::System.to_string(), "system");
    }
}
