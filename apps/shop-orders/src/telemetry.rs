//! Tracing Setup
//!
//! Installs the global `tracing` subscriber.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Filter directives; overrides `observability.logging.level`
//! - `observability.logging.format`: `json` (default) or `pretty`

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global subscriber from logging configuration.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    }
}
