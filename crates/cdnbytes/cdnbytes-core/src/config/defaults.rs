//! Compiled defaults.

/// Fallback tracing filter, used when neither `CDNBYTES_LOG` nor a config
/// filter is set.
pub const DEFAULT_LOG_FILTER: &str = "cdnbytes=info";
pub const DEFAULT_LOG_FINALIZED: bool = true;
pub const DEFAULT_LOG_SKIPPED: bool = true;
