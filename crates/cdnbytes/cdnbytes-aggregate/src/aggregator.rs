use cdnbytes_core::errors::{CdnBytesResult, EntryError};
use cdnbytes_core::{finalize_span, ingest_span, merge_span, CdnBytesConfig};

use crate::buffer::{BucketBuffer, BucketTotals};
use crate::classify::ClassificationTable;
use crate::diagnostics::{FoldPhase, FoldReport};
use crate::record::{EntryValue, InputRecord};

/// Logging switches for the aggregator. Neither affects results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorOptions {
    /// Emit each finalized bucket at debug level.
    pub log_finalized: bool,
    /// Emit a warning for each skipped entry.
    pub log_skipped: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            log_finalized: true,
            log_skipped: true,
        }
    }
}

/// Folds counter records and partial buffers into max-per-bucket buffers.
///
/// Holds only the immutable classification table, so one aggregator can be
/// shared across threads and groups. Each buffer needs exclusive access
/// while it is being mutated.
#[derive(Debug, Clone, Default)]
pub struct BucketAggregator {
    table: ClassificationTable,
    options: AggregatorOptions,
}

impl BucketAggregator {
    /// Create an aggregator over `table` with default options.
    pub fn new(table: ClassificationTable) -> Self {
        Self {
            table,
            options: AggregatorOptions::default(),
        }
    }

    /// Create with explicit logging options.
    pub fn with_options(table: ClassificationTable, options: AggregatorOptions) -> Self {
        Self { table, options }
    }

    /// Build the table and options from a loaded config.
    pub fn from_config(config: &CdnBytesConfig) -> CdnBytesResult<Self> {
        let table = ClassificationTable::from_config(&config.classification)?;
        Ok(Self::with_options(
            table,
            AggregatorOptions {
                log_finalized: config.logging.log_finalized,
                log_skipped: config.logging.log_skipped,
            },
        ))
    }

    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    pub fn options(&self) -> AggregatorOptions {
        self.options
    }

    /// Bucket name for `key`.
    pub fn classify<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.classify(key)
    }

    pub fn new_buffer(&self) -> BucketBuffer {
        BucketBuffer::new()
    }

    /// Build a buffer from raw `(key, value)` pairs, e.g. a decoded partial.
    ///
    /// Keys are classified and colliding buckets keep the max, so the result
    /// is indistinguishable from a buffer built by ingest.
    pub fn buffer_from_pairs<I, K>(&self, pairs: I) -> BucketBuffer
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut buffer = self.new_buffer();
        for (key, value) in pairs {
            buffer.observe(self.classify(key.as_ref()), value);
        }
        buffer
    }

    /// Fold one record into `buffer`. `None` and empty records are no-ops.
    ///
    /// Entries with a missing or malformed value are skipped and reported;
    /// the rest of the record still applies.
    pub fn ingest(&self, buffer: &mut BucketBuffer, record: Option<&InputRecord>) -> FoldReport {
        let Some(record) = record else {
            return FoldReport::new();
        };
        let _span = ingest_span!(record.len()).entered();
        self.fold(buffer, FoldPhase::Ingest, record.iter())
    }

    /// Fold the partial `other` into `acc`. `other` is not modified.
    ///
    /// Each entry of `other` is treated as a single-key ingest, so keys are
    /// reclassified. Canonical bucket names classify to themselves, which
    /// makes this an identity for them.
    pub fn merge(&self, acc: &mut BucketBuffer, other: &BucketBuffer) -> FoldReport {
        let _span = merge_span!(other.len()).entered();
        let mut report = FoldReport::new();
        for (key, value) in other.iter() {
            acc.observe(self.classify(key), value);
            report.record_applied();
        }
        report
    }

    /// Merge a decoded partial whose values may be missing or malformed.
    ///
    /// Same skip policy as [`BucketAggregator::ingest`].
    pub fn merge_entries(
        &self,
        acc: &mut BucketBuffer,
        partial: Option<&InputRecord>,
    ) -> FoldReport {
        let Some(partial) = partial else {
            return FoldReport::new();
        };
        let _span = merge_span!(partial.len()).entered();
        self.fold(acc, FoldPhase::Merge, partial.iter())
    }

    /// Snapshot the buffer as a freshly allocated output. `buffer` is untouched.
    pub fn finalize(&self, buffer: &BucketBuffer) -> BucketTotals {
        let _span = finalize_span!(buffer.len()).entered();
        if self.options.log_finalized {
            for (bucket, value) in buffer.iter() {
                tracing::debug!(bucket, value, "finalized bucket");
            }
        }
        BucketTotals::from(buffer)
    }

    fn fold<'a, I>(&self, buffer: &mut BucketBuffer, phase: FoldPhase, entries: I) -> FoldReport
    where
        I: IntoIterator<Item = (&'a str, &'a EntryValue)>,
    {
        let mut report = FoldReport::new();
        for (key, value) in entries {
            match value {
                EntryValue::Present(v) => {
                    buffer.observe(self.classify(key), *v);
                    report.record_applied();
                }
                EntryValue::Missing => {
                    self.skip(&mut report, phase, EntryError::MissingValue { key: key.to_string() });
                }
                EntryValue::Malformed(found) => {
                    self.skip(
                        &mut report,
                        phase,
                        EntryError::MalformedValue {
                            key: key.to_string(),
                            found: found.clone(),
                        },
                    );
                }
            }
        }
        report
    }

    /// Record a skipped entry, logging it when enabled.
    pub(crate) fn skip(&self, report: &mut FoldReport, phase: FoldPhase, error: EntryError) {
        if self.options.log_skipped {
            tracing::warn!(phase = %phase, error = %error, "skipping entry");
        }
        report.record_skipped(phase, error);
    }
}
