use super::error_code::{self, CdnBytesErrorCode};

/// Classification table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("rule {index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("rule {index} (pattern {pattern:?}) has an empty bucket name")]
    EmptyBucket { index: usize, pattern: String },

    #[error("pattern {pattern:?} appears more than once")]
    DuplicatePattern { pattern: String },

    #[error("bucket {bucket:?} would be reclassified as {reclassified:?}")]
    UnstableBucket {
        bucket: String,
        reclassified: String,
    },
}

impl CdnBytesErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFICATION_ERROR
    }
}
