//! The light/dark theme enum.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseThemeError;
use super::glyph::Glyph;

/// The display theme: light or dark.
///
/// The text form (`"light"` / `"dark"`) is what gets persisted in a
/// [`PreferenceStore`](crate::PreferenceStore), and is also the serde
/// representation.
///
/// # Example
///
/// ```rust
/// use nightshade::Theme;
///
/// let theme: Theme = "dark".parse().unwrap();
/// assert_eq!(theme, Theme::Dark);
/// assert_eq!(theme.complement(), Theme::Light);
/// assert_eq!(theme.as_str(), "dark");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Both themes, light first.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Maps a "prefers dark" flag to a theme.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Returns the other theme.
    pub fn complement(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the glyph the toggle control shows while this theme is applied.
    ///
    /// The glyph advertises the theme a click switches to: a sun while dark,
    /// a moon while light.
    pub fn glyph(self) -> Glyph {
        match self {
            Theme::Dark => Glyph::Sun,
            Theme::Light => Glyph::Moon,
        }
    }

    /// Returns the persisted text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Parses the persisted text form. Only the exact lowercase values are
    /// accepted; stored data is written by this crate and never by hand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}
