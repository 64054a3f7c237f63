//! Themed template rendering.

use minijinja::{context, Environment, Error, Value};
use nightshade::{TextStats, Theme, ThemeSource};
use serde::Serialize;

use crate::output::OutputMode;
use crate::palette::Palette;

const STATUS_TEMPLATE: &str =
    r#"{{ glyph }} {{ theme | style("accent") }} {{ "theme from" | style("muted") }} {{ source | style("label") }}"#;

const CHANGE_TEMPLATE: &str =
    r#"{{ glyph }} {{ "switched to" | style("muted") }} {{ theme | style("accent") }}"#;

const STATS_TEMPLATE: &str = r#"{% for row in rows -%}
{{ row.label | style("label") }}  {{ row.value | style("value") }}
{% endfor %}"#;

/// JSON shape of a theme status.
#[derive(Debug, Serialize)]
struct StatusDoc {
    theme: Theme,
    source: &'static str,
}

#[derive(Debug, Serialize)]
struct Row {
    label: String,
    value: usize,
}

/// Renders command output with the palette of the applied theme.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a renderer styled for `theme`.
    pub fn new(theme: Theme, mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("status", STATUS_TEMPLATE)?;
        env.add_template("change", CHANGE_TEMPLATE)?;
        env.add_template("stats", STATS_TEMPLATE)?;
        let mut renderer = Self { env, mode };
        renderer.set_theme(theme);
        Ok(renderer)
    }

    /// Re-registers the `style` filter with the palette for `theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        let palette = Palette::for_theme(theme);
        let use_color = self.mode.should_use_color();
        self.env
            .add_filter("style", move |value: Value, name: String| -> String {
                palette.apply(&name, &value.to_string(), use_color)
            });
    }

    /// Renders the applied theme, its glyph text and where it came from.
    pub fn status(
        &self,
        glyph: &str,
        theme: Theme,
        source: ThemeSource,
    ) -> Result<String, Error> {
        if self.mode.is_json() {
            return to_json(&StatusDoc {
                theme,
                source: source.as_str(),
            });
        }
        self.env.get_template("status")?.render(context! {
            glyph => glyph,
            theme => theme.as_str(),
            source => source.as_str(),
        })
    }

    /// Renders a one-line change notice.
    pub fn change(&self, glyph: &str, theme: Theme) -> Result<String, Error> {
        if self.mode.is_json() {
            return to_json(&context! { changed => theme.as_str() });
        }
        self.env.get_template("change")?.render(context! {
            glyph => glyph,
            theme => theme.as_str(),
        })
    }

    /// Renders text statistics as an aligned table.
    pub fn stats(&self, stats: &TextStats) -> Result<String, Error> {
        if self.mode.is_json() {
            return to_json(stats);
        }
        let entries = [
            ("Characters", stats.characters),
            ("Characters (no spaces)", stats.characters_no_spaces),
            ("Words", stats.words),
            ("Lines", stats.lines),
            ("Sentences", stats.sentences),
            ("Paragraphs", stats.paragraphs),
            ("Longest line (columns)", stats.longest_line_width),
            ("Reading time (min)", stats.reading_minutes),
            ("Estimated tokens", stats.estimated_tokens),
        ];
        let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let rows: Vec<Row> = entries
            .into_iter()
            .map(|(label, value)| Row {
                label: format!("{label:<width$}"),
                value,
            })
            .collect();
        let out = self.env.get_template("stats")?.render(context! { rows => rows })?;
        Ok(out.trim_end().to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| {
        Error::new(minijinja::ErrorKind::BadSerialization, e.to_string())
    })
}
