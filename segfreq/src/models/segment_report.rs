// src/models/segment_report.rs
use crate::models::{FrequencyTable, RankedEntry};

/// The top of a ranking together with the totals it was computed from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SegmentReport {
    pub entries: Vec<RankedEntry>,
    pub total_segments: u64,
    pub distinct_segments: usize,
}

impl SegmentReport {
    /// Ranks `table` and keeps at most `limit` entries.
    #[must_use]
    pub fn from_table(table: &FrequencyTable, limit: usize) -> Self {
        let mut entries = table.ranked();
        entries.truncate(limit);
        Self {
            entries,
            total_segments: table.total(),
            distinct_segments: table.distinct(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
