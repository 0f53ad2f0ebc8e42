use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CDN_PATTERNS;

/// A single `pattern -> bucket` rule as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub bucket: String,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            bucket: bucket.into(),
        }
    }
}

/// Classification table configuration.
///
/// ```toml
/// [classification]
/// extra_patterns = [{ pattern = "cdnfst", bucket = "Fastly" }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Replaces the built-in table when non-empty. Order is priority.
    pub patterns: Vec<PatternRule>,
    /// Appended after the base table, so they only catch keys the base table misses.
    pub extra_patterns: Vec<PatternRule>,
}

impl ClassificationConfig {
    /// Effective rules in priority order.
    pub fn effective_rules(&self) -> Vec<PatternRule> {
        let mut rules: Vec<PatternRule> = if self.patterns.is_empty() {
            DEFAULT_CDN_PATTERNS
                .iter()
                .map(|(pattern, bucket)| PatternRule::new(*pattern, *bucket))
                .collect()
        } else {
            self.patterns.clone()
        };
        rules.extend(self.extra_patterns.iter().cloned());
        rules
    }
}
