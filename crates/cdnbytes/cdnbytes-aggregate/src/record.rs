//! Input records as presented by the host engine.

use std::collections::HashMap;

/// A single measurement as the engine presented it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Present(i64),
    /// Null or absent in the engine's row.
    Missing,
    /// Present but not a 64-bit integer. Holds a short description of what was found.
    Malformed(String),
}

impl EntryValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Present(v) => Some(*v),
            Self::Missing | Self::Malformed(_) => None,
        }
    }
}

impl From<i64> for EntryValue {
    fn from(v: i64) -> Self {
        Self::Present(v)
    }
}

impl From<Option<i64>> for EntryValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Self::Missing, Self::Present)
    }
}

/// One row's `key -> value` counters. Borrowed by the aggregator, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    entries: HashMap<String, EntryValue>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<EntryValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&EntryValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InputRecord
where
    K: Into<String>,
    V: Into<EntryValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
