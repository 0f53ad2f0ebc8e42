//! Span definitions per aggregation phase.

/// Create an ingest span.
#[macro_export]
macro_rules! ingest_span {
    ($entries:expr) => {
        tracing::debug_span!("cdnbytes.ingest", entries = $entries)
    };
}

/// Create a merge span.
#[macro_export]
macro_rules! merge_span {
    ($entries:expr) => {
        tracing::debug_span!("cdnbytes.merge", entries = $entries)
    };
}

/// Create a finalize span.
#[macro_export]
macro_rules! finalize_span {
    ($buckets:expr) => {
        tracing::debug_span!("cdnbytes.finalize", buckets = $buckets)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "cdnbytes.ingest";
    pub const MERGE: &str = "cdnbytes.merge";
    pub const FINALIZE: &str = "cdnbytes.finalize";
}
