// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, Settings, load_config, process_file, run};
pub use crate::config::{CONFIG_FILE_NAME, Config, discover_config};
pub use crate::core::analyzer::{DEFAULT_TOP, analyze_file, analyze_text, count_segments};
pub use crate::core::report::{DEFAULT_PREFIX, HEADER, output_path_for, write_report};
pub use crate::core::segment::{PUNCTUATION, is_separator, segments, strip_punctuation};
pub use crate::models::{FrequencyTable, RankedEntry, SegmentReport};
