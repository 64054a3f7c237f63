//! Diagnostic logging to stderr with `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the `-v` count picks the level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a level. Warnings are always shown.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
