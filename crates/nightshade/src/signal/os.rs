//! Operating system appearance detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::PreferenceSignal;
use crate::theme::Theme;

type SignalDetector = fn() -> Theme;

static SIGNAL_DETECTOR: Lazy<Mutex<SignalDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector [`OsSignal`] uses to read the system appearance.
///
/// This is useful for testing or when you want to force a specific color mode
/// for every signal in the process.
pub fn set_signal_detector(detector: SignalDetector) {
    let mut guard = SIGNAL_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the operating system detector.
pub fn reset_signal_detector() {
    set_signal_detector(os_detector);
}

fn detect_system_theme() -> Theme {
    let detector = SIGNAL_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_detector() -> Theme {
    match detect_os_mode() {
        OsMode::Dark => Theme::Dark,
        OsMode::Light => Theme::Light,
    }
}

/// Signal backed by the operating system appearance setting.
///
/// Every query re-reads the setting, so a [`SignalWatch`](super::SignalWatch)
/// over an `OsSignal` picks up changes made while the process runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignal;

impl OsSignal {
    /// Creates a signal reading the current OS appearance.
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceSignal for OsSignal {
    fn prefers_dark(&self) -> bool {
        detect_system_theme().is_dark()
    }
}
