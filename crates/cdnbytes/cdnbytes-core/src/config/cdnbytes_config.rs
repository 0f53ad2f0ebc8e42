//! Top-level cdnbytes configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ClassificationConfig, LoggingConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CDNBYTES_*`)
/// 2. Config file passed to [`CdnBytesConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnBytesConfig {
    pub classification: ClassificationConfig,
    pub logging: LoggingConfig,
}

impl CdnBytesConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    /// Same as [`CdnBytesConfig::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Pattern: `CDNBYTES_LOG_FILTER`, `CDNBYTES_LOG_FINALIZED`, `CDNBYTES_LOG_SKIPPED`.
    /// Unparseable booleans are ignored.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env(constants::ENV_LOG_FILTER) {
            self.logging.filter = val;
        }
        if let Some(v) = env_flag(&env, constants::ENV_LOG_FINALIZED) {
            self.logging.log_finalized = v;
        }
        if let Some(v) = env_flag(&env, constants::ENV_LOG_SKIPPED) {
            self.logging.log_skipped = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sections = [
            ("classification.patterns", &self.classification.patterns),
            ("classification.extra_patterns", &self.classification.extra_patterns),
        ];
        for (section, rules) in sections {
            for (i, rule) in rules.iter().enumerate() {
                if rule.pattern.is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("{section}[{i}].pattern"),
                        message: "must not be empty".to_string(),
                    });
                }
                if rule.bucket.is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("{section}[{i}].bucket"),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::ValidationFailed {
                field: "logging.filter".to_string(),
                message: e.to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_flag<F>(env: &F, name: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env(name)?;
    let parsed = parse_flag(&raw);
    if parsed.is_none() {
        tracing::warn!(var = name, value = %raw, "ignoring unparseable boolean override");
    }
    parsed
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
