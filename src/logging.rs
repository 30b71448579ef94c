//! Logging bootstrap built on `tracing-subscriber`.
//!
//! Output goes to stderr so stdout stays reserved for CSV responses.

use std::error::Error;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when set, `default_level` otherwise.
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(default_level: LevelFilter) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init()
}
