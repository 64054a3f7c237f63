//! System preference signals.
//!
//! A [`PreferenceSignal`] reports whether the host environment currently asks
//! for a dark color scheme. The controller reads it once at initialization;
//! afterwards hosts forward changes to
//! [`ThemeController::system_preference_changed`](crate::ThemeController::system_preference_changed).
//!
//! - [`OsSignal`]: Reads the operating system appearance setting
//! - [`FixedSignal`]: A shared, flippable flag for tests and forced modes
//! - [`SignalWatch`]: Turns any signal into a change detector for polling hosts

mod fixed;
mod os;
mod watch;

pub use fixed::FixedSignal;
pub use os::{reset_signal_detector, set_signal_detector, OsSignal};
pub use watch::SignalWatch;

use crate::theme::Theme;

/// The host environment's dark/light preference.
pub trait PreferenceSignal {
    /// Returns `true` when the host currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Returns the theme matching the current preference.
    fn system_theme(&self) -> Theme {
        Theme::from_dark(self.prefers_dark())
    }
}

impl<S: PreferenceSignal + ?Sized> PreferenceSignal for &S {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

impl<S: PreferenceSignal + ?Sized> PreferenceSignal for Box<S> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
