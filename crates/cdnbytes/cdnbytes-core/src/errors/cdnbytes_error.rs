//! Umbrella error for setup-time failures.

use super::{ClassificationError, ConfigError, EntryError, ShapeError};
use super::error_code::CdnBytesErrorCode;

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CdnBytesError {
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),
}

impl CdnBytesErrorCode for CdnBytesError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Shape(e) => e.error_code(),
            Self::Classification(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Entry(e) => e.error_code(),
        }
    }
}

pub type CdnBytesResult<T> = Result<T, CdnBytesError>;
