//! The terminal as a theme surface.

use console::Emoji;
use nightshade::{Glyph, Surface};

/// Surface for a terminal session.
///
/// The "dark marker" is the theme the session renders with and the "icon" is
/// the glyph printed in front of status lines. Both elements always exist.
#[derive(Debug, Clone, Default)]
pub struct TermSurface {
    dark: bool,
    glyph: Option<Glyph>,
}

impl TermSurface {
    /// Creates a light surface with no glyph shown yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text of the glyph set by the last apply, or an empty
    /// string before the first one.
    pub fn glyph_text(&self) -> String {
        self.glyph.map(glyph_text).unwrap_or_default()
    }
}

/// Renders `glyph` for the current terminal, falling back to ASCII on
/// terminals without emoji.
pub fn glyph_text(glyph: Glyph) -> String {
    let fallback = match glyph {
        Glyph::Sun => "[sun]",
        Glyph::Moon => "[moon]",
    };
    Emoji(glyph.as_str(), fallback).to_string()
}

impl Surface for TermSurface {
    fn has_toggle_control(&self) -> bool {
        true
    }

    fn has_icon(&self) -> bool {
        true
    }

    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_glyph(&mut self, glyph: Glyph) {
        self.glyph = Some(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_surface_records_state() {
        let mut surface = TermSurface::new();
        assert!(surface.has_toggle_control() && surface.has_icon());
        assert_eq!(surface.glyph_text(), "");

        surface.set_dark(true);
        surface.set_glyph(Glyph::Sun);
        assert!(surface.is_dark());
        assert_eq!(surface.glyph, Some(Glyph::Sun));
    }

    #[test]
    fn test_glyph_text_has_ascii_fallback() {
        let text = glyph_text(Glyph::Moon);
        assert!(text == "🌙" || text == "[moon]");
    }
}
