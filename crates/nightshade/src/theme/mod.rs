//! Theme values and the glyph that advertises them.
//!
//! This module provides:
//!
//! - [`Theme`]: The two-valued display mode, light or dark
//! - [`Glyph`]: The icon shown on the toggle control for a given theme
//! - [`ParseThemeError`]: Error for theme text that is neither `light` nor `dark`

mod error;
mod glyph;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ParseThemeError;
pub use glyph::Glyph;
pub use theme::Theme;
