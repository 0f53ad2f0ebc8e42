//! CdnBytesErrorCode trait for the host boundary.

/// Every error enum implements this to give the host engine a stable
/// code string alongside the human-readable message.
pub trait CdnBytesErrorCode {
    /// Returns the error code string (e.g., "SHAPE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
pub const CLASSIFICATION_ERROR: &str = "CLASSIFICATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_VALUE: &str = "MISSING_VALUE";
pub const MALFORMED_VALUE: &str = "MALFORMED_VALUE";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const UNEXPECTED_ARGUMENTS: &str = "UNEXPECTED_ARGUMENTS";
