//! The display surface the controller drives.
//!
//! A surface is whatever shows the theme to the user: a page root carrying a
//! dark-mode marker plus a toggle control with an icon, a terminal status
//! line, a window chrome. The controller only needs to set the marker, set
//! the glyph and read the marker back.

use crate::theme::Glyph;

/// Display port mutated by [`ThemeController`](crate::ThemeController).
pub trait Surface {
    /// Returns `true` if the toggle control is present.
    fn has_toggle_control(&self) -> bool;

    /// Returns `true` if the toggle control contains an icon element.
    fn has_icon(&self) -> bool;

    /// Returns `true` while the dark-mode marker is set.
    fn is_dark(&self) -> bool;

    /// Sets or clears the dark-mode marker.
    fn set_dark(&mut self, dark: bool);

    /// Replaces the glyph shown by the icon element.
    fn set_glyph(&mut self, glyph: Glyph);
}

/// An in-memory surface that records what the controller did to it.
///
/// # Example
///
/// ```rust
/// use nightshade::{MemorySurface, Surface};
///
/// let surface = MemorySurface::new();
/// assert!(surface.has_toggle_control() && surface.has_icon());
/// assert_eq!(surface.mutations(), 0);
///
/// let bare = MemorySurface::without_icon();
/// assert!(!bare.has_icon());
/// ```
#[derive(Debug, Clone)]
pub struct MemorySurface {
    toggle_control: bool,
    icon: bool,
    dark: bool,
    glyph: Option<Glyph>,
    mutations: usize,
}

impl MemorySurface {
    /// Creates a surface with both a toggle control and an icon.
    pub fn new() -> Self {
        Self {
            toggle_control: true,
            icon: true,
            dark: false,
            glyph: None,
            mutations: 0,
        }
    }

    /// Creates a surface whose toggle control has no icon.
    pub fn without_icon() -> Self {
        Self {
            icon: false,
            ..Self::new()
        }
    }

    /// Creates a surface with no toggle control (and therefore no icon).
    pub fn without_toggle_control() -> Self {
        Self {
            toggle_control: false,
            icon: false,
            ..Self::new()
        }
    }

    /// Returns the glyph last set, if any.
    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }

    /// Returns how many marker or glyph writes happened.
    pub fn mutations(&self) -> usize {
        self.mutations
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn has_toggle_control(&self) -> bool {
        self.toggle_control
    }

    fn has_icon(&self) -> bool {
        self.toggle_control && self.icon
    }

    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        self.mutations += 1;
    }

    fn set_glyph(&mut self, glyph: Glyph) {
        self.glyph = Some(glyph);
        self.mutations += 1;
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn has_toggle_control(&self) -> bool {
        (**self).has_toggle_control()
    }

    fn has_icon(&self) -> bool {
        (**self).has_icon()
    }

    fn is_dark(&self) -> bool {
        (**self).is_dark()
    }

    fn set_dark(&mut self, dark: bool) {
        (**self).set_dark(dark)
    }

    fn set_glyph(&mut self, glyph: Glyph) {
        (**self).set_glyph(glyph)
    }
}
