// src/models/frequency_table.rs
use indexmap::IndexMap;

use crate::models::RankedEntry;

/// Occurrence counts for every distinct segment, kept in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, segment: String) {
        let count = self.counts.entry(segment).or_insert(0);
        *count = count.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }

    /// Number of segments recorded, duplicates included.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct segments.
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `segment`, or `None` if it was never recorded.
    #[inline]
    #[must_use]
    pub fn count(&self, segment: &str) -> Option<u64> {
        self.counts.get(segment).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates over `(segment, count)` pairs in first-seen order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(segment, &count)| (segment.as_str(), count))
    }

    /// Ranks every distinct segment by descending count.
    ///
    /// Segments with equal counts keep the order in which they were first
    /// seen. Returns an empty ranking when nothing was recorded.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedEntry> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut ordered: Vec<(&str, u64)> = self.iter().collect();
        // sort_by is stable, so ties stay in first-seen order
        ordered.sort_by(|a, b| b.1.cmp(&a.1));

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, (segment, count))| {
                RankedEntry::new(index.saturating_add(1), segment, count, self.total)
            })
            .collect()
    }
}

impl Extend<String> for FrequencyTable {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for segment in iter {
            self.record(segment);
        }
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
