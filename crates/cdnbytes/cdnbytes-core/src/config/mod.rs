//! Configuration system for cdnbytes.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod cdnbytes_config;
pub mod classification_config;
pub mod defaults;
pub mod logging_config;

pub use cdnbytes_config::CdnBytesConfig;
pub use classification_config::{ClassificationConfig, PatternRule};
pub use logging_config::LoggingConfig;
