//! Logging setup.

use crate::config::{AppConfig, LogLevel};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins when set, otherwise `level`.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()))
}

/// Initialize the global tracing subscriber.
///
/// Production mode writes JSON lines, otherwise human-readable text. Logs
/// always go to stderr. Calling this twice is harmless; the second call is
/// ignored.
pub fn initialize_tracing(app: &AppConfig, level_override: Option<LogLevel>) {
    let filter = build_filter(level_override.unwrap_or(app.log_level));

    let result = if app.prod {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
