// src/core/analyzer.rs
use anyhow::{Context as _, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::core::segment::segments;
use crate::models::{FrequencyTable, SegmentReport};

/// Number of ranked entries kept when no limit is configured.
pub const DEFAULT_TOP: usize = 150;

/// Builds the frequency table for a block of text.
#[inline]
#[must_use]
pub fn count_segments(text: &str) -> FrequencyTable {
    segments(text).collect()
}

/// Ranks the segments of `text`, keeping at most `limit` entries.
///
/// Text without any segment yields an empty report.
#[inline]
#[must_use]
pub fn analyze_text(text: &str, limit: usize) -> SegmentReport {
    let table = count_segments(text);
    debug!(
        "Counted {} segments ({} distinct)",
        table.total(),
        table.distinct()
    );
    SegmentReport::from_table(&table, limit)
}

/// Reads a UTF-8 text file and ranks its segments.
///
/// # Arguments
///
/// * `path` - The file to analyze
/// * `limit` - Maximum number of ranked entries to keep
///
/// # Returns
///
/// * `Ok(SegmentReport)` - The top segments with their counts and shares
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file is not valid UTF-8
#[inline]
pub fn analyze_file(path: &Path, limit: usize) -> Result<SegmentReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    info!("Analyzing {} ({} bytes)", path.display(), content.len());

    Ok(analyze_text(&content, limit))
}
