/// Name the aggregate is registered under in the host engine.
pub const FUNCTION_NAME: &str = "shaman_cdnbytesloaded";

/// Short description exposed to the host planner.
pub const FUNCTION_DESCRIPTION: &str = "calculate the cdn bytes loaded";

/// Default CDN classification rules as `(pattern, bucket)`, highest priority first.
///
/// A key belongs to the first bucket whose pattern it contains.
pub const DEFAULT_CDN_PATTERNS: &[(&str, &str)] = &[
    ("cdnl3nl", "Level3"),
    ("cdnak", "Akamai"),
    ("cndllnwnl", "LimeLight"),
    ("cdncd", "CDNetworks"),
];

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "CDNBYTES_LOG";

/// Config env overrides.
pub const ENV_LOG_FILTER: &str = "CDNBYTES_LOG_FILTER";
pub const ENV_LOG_FINALIZED: &str = "CDNBYTES_LOG_FINALIZED";
pub const ENV_LOG_SKIPPED: &str = "CDNBYTES_LOG_SKIPPED";
