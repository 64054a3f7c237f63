//! A manually driven signal.

use std::cell::Cell;
use std::rc::Rc;

use super::PreferenceSignal;
use crate::theme::Theme;

/// A preference signal whose value is set by hand.
///
/// Clones share the same flag, so a test can hand one clone to the
/// controller and flip the other to simulate the host changing its
/// preference.
///
/// # Example
///
/// ```rust
/// use nightshade::{FixedSignal, PreferenceSignal, Theme};
///
/// let signal = FixedSignal::new(Theme::Light);
/// let remote = signal.clone();
/// remote.set(Theme::Dark);
/// assert!(signal.prefers_dark());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedSignal {
    dark: Rc<Cell<bool>>,
}

impl FixedSignal {
    /// Creates a signal reporting `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            dark: Rc::new(Cell::new(theme.is_dark())),
        }
    }

    /// Changes the reported preference for every clone.
    pub fn set(&self, theme: Theme) {
        self.dark.set(theme.is_dark());
    }
}

impl PreferenceSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
