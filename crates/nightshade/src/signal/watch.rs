//! Change detection for signals without push notifications.

use super::PreferenceSignal;
use crate::theme::Theme;

/// Remembers the last observed system theme and reports changes.
///
/// The operating system appearance has no portable change callback, so
/// hosts poll a `SignalWatch` and forward whatever it returns to
/// [`ThemeController::system_preference_changed`](crate::ThemeController::system_preference_changed).
///
/// # Example
///
/// ```rust
/// use nightshade::{FixedSignal, SignalWatch, Theme};
///
/// let signal = FixedSignal::new(Theme::Light);
/// let mut watch = SignalWatch::new(signal.clone());
/// assert_eq!(watch.poll(), None);
///
/// signal.set(Theme::Dark);
/// assert_eq!(watch.poll(), Some(Theme::Dark));
/// assert_eq!(watch.poll(), None);
/// ```
#[derive(Debug)]
pub struct SignalWatch<S> {
    signal: S,
    last: Theme,
}

impl<S: PreferenceSignal> SignalWatch<S> {
    /// Starts watching `signal`, taking its current value as the baseline.
    pub fn new(signal: S) -> Self {
        let last = signal.system_theme();
        Self { signal, last }
    }

    /// Starts watching `signal` with an explicit baseline.
    ///
    /// The first poll reports the signal's theme if it differs from
    /// `baseline`.
    pub fn starting_from(signal: S, baseline: Theme) -> Self {
        Self {
            signal,
            last: baseline,
        }
    }

    /// Returns the new system theme if it changed since the last poll.
    pub fn poll(&mut self) -> Option<Theme> {
        let current = self.signal.system_theme();
        if current == self.last {
            return None;
        }
        self.last = current;
        Some(current)
    }

    /// Returns the most recently observed system theme.
    pub fn last(&self) -> Theme {
        self.last
    }
}
