//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::config::defaults;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize the cdnbytes tracing/logging system.
///
/// Reads the `CDNBYTES_LOG` environment variable for filtering.
/// Format: `CDNBYTES_LOG=cdnbytes_aggregate=debug`
///
/// Falls back to `cdnbytes=info` if `CDNBYTES_LOG` is not set or is invalid.
///
/// Idempotent. Only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));
    init_with(filter);
}

/// Initialize tracing from a [`LoggingConfig`]. `CDNBYTES_LOG` still wins when set.
pub fn init_tracing_from_config(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));
    init_with(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    init_with(EnvFilter::new(filter));
}

fn init_with(filter: EnvFilter) {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
