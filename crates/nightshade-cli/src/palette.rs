//! Console styles for each theme.

use std::collections::HashMap;

use console::Style;
use nightshade::Theme;

/// Named styles used by the output templates.
///
/// Every palette defines the same names: `accent`, `label`, `value` and
/// `muted`.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    /// Builds the palette for `theme`.
    ///
    /// Dark terminals get bright foregrounds, light terminals get the plain
    /// ANSI colors so text stays readable on a white background.
    pub fn for_theme(theme: Theme) -> Self {
        let styles = match theme {
            Theme::Dark => [
                ("accent", Style::new().yellow().bold()),
                ("label", Style::new().cyan()),
                ("value", Style::new().white().bright().bold()),
                ("muted", Style::new().black().bright()),
            ],
            Theme::Light => [
                ("accent", Style::new().blue().bold()),
                ("label", Style::new().magenta()),
                ("value", Style::new().black().bold()),
                ("muted", Style::new().dim()),
            ],
        };
        Self {
            styles: styles.into_iter().collect(),
        }
    }

    /// Applies the named style. Unknown names leave the text unstyled.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    /// Returns `true` if `name` is defined.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}
