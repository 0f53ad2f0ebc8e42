//! Skipped-entry diagnostics.
//!
//! Ingest and merge never fail. An entry that cannot be folded is skipped,
//! the rest of the record still applies, and the skip is recorded here so
//! callers can audit what was dropped.

use std::fmt;

use cdnbytes_core::errors::EntryError;

/// Which fold produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldPhase {
    Ingest,
    Merge,
}

impl FoldPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingest => "ingest",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for FoldPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one entry that was not folded into the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub phase: FoldPhase,
    pub error: EntryError,
}

/// Outcome of one ingest or merge call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldReport {
    applied: usize,
    skipped: Vec<SkippedEntry>,
}

impl FoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_applied(&mut self) {
        self.applied += 1;
    }

    /// Record a skipped entry. The fold continues with the remaining entries.
    pub(crate) fn record_skipped(&mut self, phase: FoldPhase, error: EntryError) {
        self.skipped.push(SkippedEntry { phase, error });
    }

    /// Fold another report into this one, e.g. to summarise a whole group.
    pub fn absorb(&mut self, other: FoldReport) {
        self.applied += other.applied;
        self.skipped.extend(other.skipped);
    }

    /// Number of entries folded into the buffer.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Whether every presented entry was applied.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_sums_applied_and_keeps_all_skips() {
        let mut group = FoldReport::new();
        group.record_applied();

        let mut call = FoldReport::new();
        call.record_applied();
        call.record_applied();
        call.record_skipped(
            FoldPhase::Merge,
            EntryError::MissingValue {
                key: "stray".to_string(),
            },
        );

        group.absorb(call);

        assert_eq!(group.applied(), 3);
        assert_eq!(group.skipped_count(), 1);
        assert_eq!(group.skipped()[0].phase, FoldPhase::Merge);
        assert!(!group.is_clean());
    }
}
