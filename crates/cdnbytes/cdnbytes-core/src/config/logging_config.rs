use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `CDNBYTES_LOG` is unset.
    pub filter: String,
    /// Emit each finalized bucket at debug level.
    pub log_finalized: bool,
    /// Emit a warning for each skipped entry.
    pub log_skipped: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            log_finalized: defaults::DEFAULT_LOG_FINALIZED,
            log_skipped: defaults::DEFAULT_LOG_SKIPPED,
        }
    }
}
