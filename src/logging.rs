//! Logging initialization.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable selecting the log level (`error` through `trace`).
pub const LOG_LEVEL_ENV: &str = "ROUTEGEN_LOG";

/// Resolves the log level from an optional setting, defaulting to INFO.
#[must_use]
pub fn resolve_level(setting: Option<&str>) -> Level {
    setting.and_then(|value| Level::from_str(value.trim()).ok()).unwrap_or(Level::INFO)
}

/// Installs the global subscriber writing plain level-prefixed lines to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging() -> Result<(), String> {
    let setting = std::env::var(LOG_LEVEL_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(resolve_level(setting.as_deref()))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("failed to initialize logging: {e}"))
}
