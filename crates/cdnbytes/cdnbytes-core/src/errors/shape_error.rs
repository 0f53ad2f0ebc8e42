//! Argument-binding errors raised before any aggregation starts.

use super::error_code::{self, CdnBytesErrorCode};

/// The host presented arguments the aggregate cannot bind to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("{function} takes exactly {expected} parameter(s), got {actual}")]
    WrongArity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("parameter {index} must be {expected}, got {actual}")]
    WrongType {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("{operation} is not valid in {mode} mode")]
    ModeMismatch {
        operation: &'static str,
        mode: &'static str,
    },
}

impl CdnBytesErrorCode for ShapeError {
    fn error_code(&self) -> &'static str {
        error_code::SHAPE_ERROR
    }
}
