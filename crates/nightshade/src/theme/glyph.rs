//! Toggle-control glyphs.

/// Icon displayed inside the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Shown while the dark theme is applied.
    Sun,
    /// Shown while the light theme is applied.
    Moon,
}

impl Glyph {
    /// Returns the emoji rendered for this glyph.
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Sun => "☀️",
            Glyph::Moon => "🌙",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
