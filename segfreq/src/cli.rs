// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{Config, discover_config};
use crate::core::analyzer::{DEFAULT_TOP, analyze_file};
use crate::core::report::{DEFAULT_PREFIX, output_path_for, write_report};
use crate::models::SegmentReport;
use crate::utils::print_top_segments;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Segmented text file to analyze
    pub input: PathBuf,

    /// Number of top segments to keep [default: 150]
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Prefix of the report file name [default: top_segments_]
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Write the report to this exact path
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Directory for the report (defaults to the input's directory)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Config file to use instead of searching for .segfreq.toml
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Also print the ranked segments to stdout
    #[arg(short = 's', long)]
    pub show: bool,
}

/// Effective settings after layering defaults, config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub top: usize,
    pub prefix: String,
    pub output_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            prefix: String::from(DEFAULT_PREFIX),
            output_dir: None,
            output: None,
        }
    }
}

impl Settings {
    /// Command-line flags take precedence over the config file.
    #[must_use]
    pub fn resolve(args: &Args, config: Config) -> Self {
        let defaults = Self::default();
        Self {
            top: args.top.or(config.top).unwrap_or(defaults.top),
            prefix: args.prefix.clone().or(config.prefix).unwrap_or(defaults.prefix),
            output_dir: args.output_dir.clone().or(config.output_dir),
            output: args.output.clone(),
        }
    }

    /// Where the report for `input` will be written.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit output is set and `input` has no file name.
    pub fn report_path(&self, input: &Path) -> Result<PathBuf> {
        match &self.output {
            Some(path) => Ok(path.clone()),
            None => output_path_for(input, &self.prefix, self.output_dir.as_deref()),
        }
    }
}

/// Loads the config named by `--config`, or searches for one starting in the
/// input's directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The explicit config file cannot be read or parsed
/// * A discovered config file cannot be read or parsed
/// * The current directory cannot be determined
pub fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return Config::from_file(path);
    }

    let input_dir = args
        .input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let absolute_dir = if input_dir.is_absolute() {
        input_dir.to_path_buf()
    } else {
        env::current_dir()?.join(input_dir)
    };

    discover_config(&absolute_dir)
}

/// Analyzes `input` and writes its report.
///
/// # Returns
///
/// * `Ok((PathBuf, SegmentReport))` - The report path and the report written to it
///
/// # Errors
///
/// This function may return an error if:
/// * The input file cannot be read or is not UTF-8
/// * The report path cannot be derived
/// * The report file cannot be written
pub fn process_file(input: &Path, settings: &Settings) -> Result<(PathBuf, SegmentReport)> {
    let report = analyze_file(input, settings.top)?;
    let output_path = settings.report_path(input)?;
    write_report(&output_path, &report)?;
    info!(
        "{} of {} distinct segments written",
        report.len(),
        report.distinct_segments
    );
    Ok((output_path, report))
}

/// Runs the analyzer for parsed command-line arguments.
///
/// # Errors
///
/// Fails when the config, input or output cannot be handled; see
/// [`load_config`] and [`process_file`].
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args).context("Failed to load configuration")?;
    let settings = Settings::resolve(&args, config);

    let (output_path, report) = process_file(&args.input, &settings)
        .with_context(|| format!("Failed to analyze: {}", args.input.display()))?;

    if args.show {
        print_top_segments(&report);
    }
    println!(
        "Top frequent segments written to '{}'.",
        output_path.display()
    );

    Ok(())
}
