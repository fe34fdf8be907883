// src/utils.rs
use crate::models::SegmentReport;

pub fn print_top_segments(report: &SegmentReport) {
    for entry in &report.entries {
        println!(
            "{:4}  {:8}  {:>7}  {}",
            entry.rank,
            entry.count,
            entry.percentage(),
            entry.segment
        );
    }
    println!(
        "{} segments total, {} distinct",
        report.total_segments, report.distinct_segments
    );
}
