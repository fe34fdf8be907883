// src/core/report.rs
use anyhow::{Context as _, Result, anyhow};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::SegmentReport;

/// First line of every report.
pub const HEADER: &str = "No.\tSegment\tCount\tPercentage";

/// Prefix of the derived output file name.
pub const DEFAULT_PREFIX: &str = "top_segments_";

impl SegmentReport {
    /// Writes the header followed by one tab-separated line per entry.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{HEADER}")?;
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        Ok(())
    }

    /// The same text [`SegmentReport::write_tsv`] produces, as a `String`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = String::from(HEADER);
        rendered.push('\n');
        for entry in &self.entries {
            rendered.push_str(&entry.to_string());
            rendered.push('\n');
        }
        rendered
    }
}

/// Derives where the report for `input` is written.
///
/// The file is named `<prefix><stem>.txt`, where `stem` is the input's file
/// name without its last extension. It lands in `output_dir` when given,
/// otherwise next to the input.
///
/// # Errors
///
/// Returns an error if `input` has no file name (e.g. `/` or `..`).
#[inline]
pub fn output_path_for(input: &Path, prefix: &str, output_dir: Option<&Path>) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("Input path has no file name: {}", input.display()))?;

    let mut file_name = std::ffi::OsString::from(prefix);
    file_name.push(stem);
    file_name.push(".txt");

    let directory = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    Ok(directory.join(file_name))
}

/// Writes `report` to `path`, replacing any existing file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be created (missing directory, permissions)
/// * Writing or flushing the file fails
#[inline]
pub fn write_report(path: &Path, report: &SegmentReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    report
        .write_tsv(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    debug!("Wrote {} entries to {}", report.len(), path.display());
    Ok(())
}
