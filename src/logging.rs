//! Tracing setup for hosts embedding the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize logging at INFO, overridable with `RUST_LOG`.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a default level; `RUST_LOG` still wins.
///
/// Leaves an already installed global subscriber in place.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already set, keeping it");
    }
}

pub fn init_from_config(config: &LoggingConfig) {
    init_with_level(&config.level)
}
