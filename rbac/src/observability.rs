//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
