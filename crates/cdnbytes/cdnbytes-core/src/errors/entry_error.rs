//! Per-entry errors. These never escape an ingest or merge call; the
//! aggregator skips the entry and records the error in its fold report.

use super::error_code::{self, CdnBytesErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("value for key {key:?} is missing")]
    MissingValue { key: String },

    #[error("value for key {key:?} is not a 64-bit integer: {found}")]
    MalformedValue { key: String, found: String },

    #[error("expected a key/value map, got {found}")]
    MalformedRecord { found: String },

    #[error("expected {expected} argument(s) per row, got {actual}")]
    UnexpectedArguments { expected: usize, actual: usize },
}

impl EntryError {
    /// Key of the offending entry, if the error is tied to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingValue { key } | Self::MalformedValue { key, .. } => Some(key),
            Self::MalformedRecord { .. } | Self::UnexpectedArguments { .. } => None,
        }
    }
}

impl CdnBytesErrorCode for EntryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingValue { .. } => error_code::MISSING_VALUE,
            Self::MalformedValue { .. } => error_code::MALFORMED_VALUE,
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
            Self::UnexpectedArguments { .. } => error_code::UNEXPECTED_ARGUMENTS,
        }
    }
}
