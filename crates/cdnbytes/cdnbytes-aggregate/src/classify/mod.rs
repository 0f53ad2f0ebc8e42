//! Substring classification of counter keys into CDN buckets.
//!
//! The table is an ordered priority list. A key belongs to the bucket of the
//! first rule whose pattern occurs anywhere in the key; keys no rule matches
//! are their own bucket.

use std::collections::HashSet;

use cdnbytes_core::config::{ClassificationConfig, PatternRule};
use cdnbytes_core::constants::DEFAULT_CDN_PATTERNS;
use cdnbytes_core::errors::ClassificationError;
use serde::{Deserialize, Serialize};

/// One `pattern -> bucket` rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub pattern: String,
    pub bucket: String,
}

impl ClassificationRule {
    pub fn new(pattern: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            bucket: bucket.into(),
        }
    }

    /// Whether `key` contains this rule's pattern.
    pub fn matches(&self, key: &str) -> bool {
        key.contains(self.pattern.as_str())
    }
}

impl From<PatternRule> for ClassificationRule {
    fn from(rule: PatternRule) -> Self {
        Self::new(rule.pattern, rule.bucket)
    }
}

/// Immutable, ordered classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    rules: Vec<ClassificationRule>,
}

impl ClassificationTable {
    /// Build a validated table. Rule order is priority order.
    ///
    /// Rejects empty patterns (they would match every key), empty bucket
    /// names, duplicate patterns, and bucket names that some earlier rule
    /// would reclassify. The last check keeps `classify(bucket) == bucket`,
    /// which merge relies on when it reclassifies partial keys.
    pub fn new<I, R>(rules: I) -> Result<Self, ClassificationError>
    where
        I: IntoIterator<Item = R>,
        R: Into<ClassificationRule>,
    {
        let table = Self {
            rules: rules.into_iter().map(Into::into).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// The built-in CDN table.
    pub fn builtin() -> Self {
        Self {
            rules: DEFAULT_CDN_PATTERNS
                .iter()
                .map(|(pattern, bucket)| ClassificationRule::new(*pattern, *bucket))
                .collect(),
        }
    }

    /// Build from the `[classification]` config section.
    pub fn from_config(config: &ClassificationConfig) -> Result<Self, ClassificationError> {
        Self::new(config.effective_rules())
    }

    fn validate(&self) -> Result<(), ClassificationError> {
        let mut seen = HashSet::with_capacity(self.rules.len());
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(ClassificationError::EmptyPattern { index });
            }
            if rule.bucket.is_empty() {
                return Err(ClassificationError::EmptyBucket {
                    index,
                    pattern: rule.pattern.clone(),
                });
            }
            if !seen.insert(rule.pattern.as_str()) {
                return Err(ClassificationError::DuplicatePattern {
                    pattern: rule.pattern.clone(),
                });
            }
        }
        for rule in &self.rules {
            let reclassified = self.classify(&rule.bucket);
            if reclassified != rule.bucket {
                return Err(ClassificationError::UnstableBucket {
                    bucket: rule.bucket.clone(),
                    reclassified: reclassified.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Bucket for `key`: the first matching rule's bucket, or `key` itself.
    pub fn classify<'a>(&'a self, key: &'a str) -> &'a str {
        match self.matching_rule(key) {
            Some(rule) => rule.bucket.as_str(),
            None => key,
        }
    }

    /// First rule whose pattern `key` contains.
    pub fn matching_rule(&self, key: &str) -> Option<&ClassificationRule> {
        self.rules.iter().find(|rule| rule.matches(key))
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Canonical bucket names, in first-appearance order.
    pub fn buckets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .map(|rule| rule.bucket.as_str())
            .filter(|bucket| seen.insert(*bucket))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_passes_validation() {
        let builtin = ClassificationTable::builtin();
        assert!(builtin.validate().is_ok());
        assert_eq!(builtin.len(), DEFAULT_CDN_PATTERNS.len());
    }

    #[test]
    fn builtin_buckets_are_unique_and_ordered() {
        assert_eq!(
            ClassificationTable::builtin().buckets(),
            vec!["Level3", "Akamai", "LimeLight", "CDNetworks"]
        );
    }
}
