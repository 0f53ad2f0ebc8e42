//! # cdnbytes-core
//!
//! Foundation crate for the CDN bytes-loaded aggregate.
//! Defines errors, config, tracing setup, and constants.
//! The aggregation crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CdnBytesConfig;
pub use errors::{CdnBytesError, CdnBytesResult};
