//! Error handling for cdnbytes.
//! One error enum per subsystem, `thiserror` only.

pub mod cdnbytes_error;
pub mod classification_error;
pub mod config_error;
pub mod entry_error;
pub mod error_code;
pub mod shape_error;

pub use cdnbytes_error::{CdnBytesError, CdnBytesResult};
pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use entry_error::EntryError;
pub use error_code::CdnBytesErrorCode;
pub use shape_error::ShapeError;
