// src/models/ranked_entry.rs
use std::fmt;

/// One row of the ranked report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub segment: String,
    pub count: u64,
    /// Share of all segments, in percent.
    pub share: f64,
}

impl RankedEntry {
    #[inline]
    #[must_use]
    pub fn new(rank: usize, segment: &str, count: u64, total: u64) -> Self {
        Self {
            rank,
            segment: segment.to_owned(),
            count,
            share: calculate_share(count, total),
        }
    }

    /// The share rendered with two decimals and a `%` suffix, e.g. `12.34%`.
    #[inline]
    #[must_use]
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.share)
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.rank,
            self.segment,
            self.count,
            self.percentage()
        )
    }
}

#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn calculate_share(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}
