// src/models.rs
mod frequency_table;
mod ranked_entry;
mod segment_report;

pub use frequency_table::FrequencyTable;
pub use ranked_entry::RankedEntry;
pub use segment_report::SegmentReport;
