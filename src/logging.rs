//! Tracing subscriber setup

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber, writing to stderr so stdout stays free for
/// responses. `RUST_LOG` overrides the configured level. A second call is a
/// no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.use_json {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_ansi(false);
        registry.with(layer).try_init()
    } else {
        let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
        registry.with(layer).try_init()
    };

    if let Err(e) = result {
        tracing::debug!("logging already initialised: {}", e);
    }
}
