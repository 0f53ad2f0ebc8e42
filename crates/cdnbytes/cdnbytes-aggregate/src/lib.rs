//! # cdnbytes-aggregate
//!
//! Max-wins bucket aggregation of per-CDN byte counters.
//!
//! Raw counter keys are folded into canonical CDN buckets by substring
//! classification. Values that land in the same bucket are combined with
//! `max`, never summed, so a bucket reports the largest amount any single
//! tagged counter saw.
//!
//! ## Operations
//!
//! - [`BucketAggregator::new_buffer`] — empty buffer for one aggregation group
//! - [`BucketAggregator::ingest`] — fold one input record into a buffer
//! - [`BucketAggregator::merge`] — fold a partial buffer into another
//! - [`BucketAggregator::finalize`] — fresh owned copy of the result
//!
//! ## Guarantees
//!
//! Merge satisfies, up to bucket-value equality:
//! 1. **Commutativity**: `merge(A, B) == merge(B, A)`
//! 2. **Associativity**: `merge(A, merge(B, C)) == merge(merge(A, B), C)`
//! 3. **Identity**: `merge(A, empty) == A`
//!
//! The host engine may therefore split and combine partials in any order.
//!
//! # Examples
//!
//! ```
//! use cdnbytes_aggregate::{BucketAggregator, InputRecord};
//!
//! let agg = BucketAggregator::default();
//! let mut buffer = agg.new_buffer();
//!
//! agg.ingest(&mut buffer, Some(&InputRecord::from_iter([("cdnak_in", 100_i64)])));
//! agg.ingest(&mut buffer, Some(&InputRecord::from_iter([("cdnak_out", 80_i64)])));
//!
//! let totals = agg.finalize(&buffer);
//! assert_eq!(totals.get("Akamai"), Some(100)); // max, not 180
//! ```

pub mod aggregator;
pub mod buffer;
pub mod classify;
pub mod diagnostics;
pub mod evaluator;
pub mod record;

// Re-export public API
pub use aggregator::{AggregatorOptions, BucketAggregator};
pub use buffer::{BucketBuffer, BucketTotals};
pub use classify::{ClassificationRule, ClassificationTable};
pub use diagnostics::{FoldPhase, FoldReport, SkippedEntry};
pub use evaluator::{CdnBytesLoaded, Evaluator, Mode, ParamShape, PrimitiveType};
pub use record::{EntryValue, InputRecord};
