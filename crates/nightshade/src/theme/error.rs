//! Theme parsing errors.

/// Error returned when text is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{value}', expected 'light' or 'dark'")]
pub struct ParseThemeError {
    /// The rejected text.
    pub value: String,
}
