//! Host engine adapter.
//!
//! Binds the aggregate to a map/combine/reduce engine: validates the argument
//! shape at setup, then drives a [`BucketAggregator`] through the engine's
//! evaluation modes. Rows and partials arrive as generic JSON values.

pub mod partial;
pub mod shape;

use std::fmt;
use std::sync::Arc;

use cdnbytes_core::constants::{FUNCTION_DESCRIPTION, FUNCTION_NAME};
use cdnbytes_core::errors::{EntryError, ShapeError};
use serde_json::Value;

use crate::aggregator::BucketAggregator;
use crate::buffer::{BucketBuffer, BucketTotals};
use crate::diagnostics::{FoldPhase, FoldReport};

pub use shape::{ParamShape, PrimitiveType};

/// Phase of the engine's plan an evaluator runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Raw rows in, partial out (map side).
    Partial1,
    /// Partials in, partial out (combiner).
    Partial2,
    /// Partials in, final result out (reduce side).
    Final,
    /// Raw rows in, final result out (no partials).
    Complete,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partial1 => "PARTIAL1",
            Self::Partial2 => "PARTIAL2",
            Self::Final => "FINAL",
            Self::Complete => "COMPLETE",
        }
    }

    pub fn consumes_rows(&self) -> bool {
        matches!(self, Self::Partial1 | Self::Complete)
    }

    pub fn consumes_partials(&self) -> bool {
        matches!(self, Self::Partial2 | Self::Final)
    }

    pub fn produces_partial(&self) -> bool {
        matches!(self, Self::Partial1 | Self::Partial2)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolver registered with the host under [`FUNCTION_NAME`].
#[derive(Debug, Clone, Default)]
pub struct CdnBytesLoaded {
    aggregator: Arc<BucketAggregator>,
}

impl CdnBytesLoaded {
    pub fn new(aggregator: BucketAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    pub fn name(&self) -> &'static str {
        FUNCTION_NAME
    }

    pub fn description(&self) -> &'static str {
        FUNCTION_DESCRIPTION
    }

    /// Validate the declared argument shapes and return an evaluator for `mode`.
    ///
    /// Exactly one `map<string,bigint>` parameter is accepted.
    pub fn evaluator(&self, mode: Mode, params: &[ParamShape]) -> Result<Evaluator, ShapeError> {
        check_params(params)?;
        Ok(Evaluator {
            mode,
            aggregator: Arc::clone(&self.aggregator),
        })
    }

    /// Shape of the finalized result.
    pub fn result_shape(&self) -> ParamShape {
        ParamShape::COUNTERS
    }
}

fn check_params(params: &[ParamShape]) -> Result<(), ShapeError> {
    if params.len() != 1 {
        return Err(ShapeError::WrongArity {
            function: FUNCTION_NAME,
            expected: 1,
            actual: params.len(),
        });
    }
    if params[0] != ParamShape::COUNTERS {
        return Err(ShapeError::WrongType {
            index: 0,
            expected: ParamShape::COUNTERS.to_string(),
            actual: params[0].to_string(),
        });
    }
    Ok(())
}

/// Per-mode driver. Cheap to clone; buffers are owned by the caller.
#[derive(Debug, Clone)]
pub struct Evaluator {
    mode: Mode,
    aggregator: Arc<BucketAggregator>,
}

impl Evaluator {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn aggregator(&self) -> &BucketAggregator {
        &self.aggregator
    }

    pub fn new_buffer(&self) -> BucketBuffer {
        self.aggregator.new_buffer()
    }

    /// Empty `buffer` so it can be reused for another group.
    pub fn reset(&self, buffer: &mut BucketBuffer) {
        buffer.clear();
    }

    /// Fold one row's arguments into `buffer`.
    ///
    /// A `None` or `null` argument is a no-op. A non-map argument, or a row
    /// with other than one argument, is skipped as a whole and reported.
    /// Only calling this outside a row-consuming mode is an error.
    pub fn iterate(
        &self,
        buffer: &mut BucketBuffer,
        args: &[Option<&Value>],
    ) -> Result<FoldReport, ShapeError> {
        self.require(self.mode.consumes_rows(), "iterate")?;
        let [arg] = args else {
            let mut report = FoldReport::new();
            self.aggregator.skip(
                &mut report,
                FoldPhase::Ingest,
                EntryError::UnexpectedArguments {
                    expected: 1,
                    actual: args.len(),
                },
            );
            return Ok(report);
        };
        Ok(self.fold_value(buffer, FoldPhase::Ingest, *arg))
    }

    /// Fold a partial produced by [`Evaluator::terminate_partial`] into `buffer`.
    pub fn merge(
        &self,
        buffer: &mut BucketBuffer,
        partial: Option<&Value>,
    ) -> Result<FoldReport, ShapeError> {
        self.require(self.mode.consumes_partials(), "merge")?;
        Ok(self.fold_value(buffer, FoldPhase::Merge, partial))
    }

    /// Encode `buffer` as a partial for the next stage.
    pub fn terminate_partial(&self, buffer: &BucketBuffer) -> Result<Value, ShapeError> {
        self.require(self.mode.produces_partial(), "terminate_partial")?;
        Ok(partial::encode_partial(buffer))
    }

    /// Produce the final result for the group.
    pub fn terminate(&self, buffer: &BucketBuffer) -> Result<BucketTotals, ShapeError> {
        self.require(!self.mode.produces_partial(), "terminate")?;
        Ok(self.aggregator.finalize(buffer))
    }

    fn fold_value(
        &self,
        buffer: &mut BucketBuffer,
        phase: FoldPhase,
        value: Option<&Value>,
    ) -> FoldReport {
        let value = match value {
            None | Some(Value::Null) => return FoldReport::new(),
            Some(value) => value,
        };
        match partial::decode_record(value) {
            Ok(record) => match phase {
                FoldPhase::Ingest => self.aggregator.ingest(buffer, Some(&record)),
                FoldPhase::Merge => self.aggregator.merge_entries(buffer, Some(&record)),
            },
            Err(error) => {
                let mut report = FoldReport::new();
                self.aggregator.skip(&mut report, phase, error);
                report
            }
        }
    }

    fn require(&self, allowed: bool, operation: &'static str) -> Result<(), ShapeError> {
        if allowed {
            Ok(())
        } else {
            Err(ShapeError::ModeMismatch {
                operation,
                mode: self.mode.as_str(),
            })
        }
    }
}
