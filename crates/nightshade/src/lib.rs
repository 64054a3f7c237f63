//! # Nightshade - light/dark theme controller
//!
//! Nightshade keeps one host's display theme in sync with what the user asked
//! for. It resolves the effective theme (a stored manual choice beats the
//! system preference), applies it to a display surface, persists manual
//! choices and tells interested code about every change.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Light or dark, persisted as `"light"` / `"dark"`
//! - [`ThemeController`]: The single owner of the applied theme
//! - [`Surface`]: Display port (dark marker plus toggle icon)
//! - [`PreferenceStore`]: Persistence port for the manual choice
//! - [`PreferenceSignal`]: The host's system dark/light preference
//!
//! ## Quick Start
//!
//! ```rust
//! use nightshade::{FixedSignal, MemoryStore, MemorySurface, Theme, ThemeController};
//!
//! let mut controller = ThemeController::init(
//!     MemorySurface::new(),
//!     MemoryStore::new(),
//!     FixedSignal::new(Theme::Dark),
//! )
//! .expect("surface has a toggle control and icon");
//!
//! controller.subscribe(|theme| println!("theme is now {theme}"));
//! assert_eq!(controller.toggle(), Theme::Light);
//! ```
//!
//! ## Hosts
//!
//! Terminal and desktop hosts use [`OsSignal`] for the system preference and
//! [`FileStore`] for persistence, polling a [`SignalWatch`] to forward
//! appearance changes. Tests use [`MemorySurface`], [`MemoryStore`] and
//! [`FixedSignal`].
//!
//! The [`stats`] module carries the text statistics shown by the writing
//! tools that share this theme.

mod controller;
pub mod signal;
pub mod stats;
pub mod store;
mod surface;
mod theme;

pub use controller::{ControllerConfig, ListenerId, SetupError, ThemeController, ThemeSource};
pub use signal::{
    reset_signal_detector, set_signal_detector, FixedSignal, OsSignal, PreferenceSignal,
    SignalWatch,
};
pub use stats::TextStats;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DEFAULT_STORAGE_KEY};
pub use surface::{MemorySurface, Surface};
pub use theme::{Glyph, ParseThemeError, Theme};
