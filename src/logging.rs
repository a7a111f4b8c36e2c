//! Diagnostic logging to stderr, controlled by `ZLI_LOG`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ZLI_LOG";

/// Initializes logging; `default_level` applies when `ZLI_LOG` is unset or invalid
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
