//! Controller setup errors.

/// Error returned by [`ThemeController::try_init`](super::ThemeController::try_init)
/// when the surface lacks an element the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The surface has no toggle control.
    #[error("theme toggle control not found")]
    MissingToggleControl,
    /// The toggle control has no icon element.
    #[error("theme toggle icon not found")]
    MissingIcon,
}
