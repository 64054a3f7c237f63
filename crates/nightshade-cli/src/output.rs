//! Output modes selected with `--output`.

use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// Machine readable JSON, one document per result.
    Json,
}

impl OutputMode {
    /// Returns `true` if styles should be applied.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    /// Returns `true` for JSON output.
    pub fn is_json(self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Auto.is_json());
    }
}
