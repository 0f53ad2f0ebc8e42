//! Aggregation buffer and finalized output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-group accumulator: bucket name -> largest value seen.
///
/// Keys are canonical bucket names or unclassified input keys verbatim.
/// Only the aggregator inserts, so every key has already been classified.
/// Use [`BucketAggregator::buffer_from_pairs`](crate::BucketAggregator::buffer_from_pairs)
/// to build one from raw pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BucketBuffer {
    buckets: HashMap<String, i64>,
}

impl BucketBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `bucket`, keeping the larger of old and new.
    pub(crate) fn observe(&mut self, bucket: &str, value: i64) {
        match self.buckets.get_mut(bucket) {
            Some(current) => *current = (*current).max(value),
            None => {
                self.buckets.insert(bucket.to_string(), value);
            }
        }
    }

    pub fn get(&self, bucket: &str) -> Option<i64> {
        self.buckets.get(bucket).copied()
    }

    pub fn contains(&self, bucket: &str) -> bool {
        self.buckets.contains_key(bucket)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Drop all buckets so the buffer can serve a new group.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

/// Finalized aggregate handed back to the engine. Independently owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketTotals {
    buckets: HashMap<String, i64>,
}

impl BucketTotals {
    pub fn get(&self, bucket: &str) -> Option<i64> {
        self.buckets.get(bucket).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, i64> {
        self.buckets
    }
}

impl From<&BucketBuffer> for BucketTotals {
    fn from(buffer: &BucketBuffer) -> Self {
        Self {
            buckets: buffer.buckets.clone(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for BucketTotals {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self {
            buckets: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
