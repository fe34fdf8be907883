// src/config.rs
use anyhow::{Context as _, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up next to the input and in its ancestors.
pub const CONFIG_FILE_NAME: &str = ".segfreq.toml";

/// Settings read from a `.segfreq.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of ranked entries to keep.
    pub top: Option<usize>,
    /// Prefix of the derived report file name.
    pub prefix: Option<String>,
    /// Directory the report is written to instead of the input's.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML, wrong value types or unknown keys.
    #[inline]
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The content is not a valid config
    #[inline]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

/// Looks for a `.segfreq.toml` starting in `dir` and walking up through its
/// parents until one is found.
///
/// # Returns
///
/// * `Ok(Config)` - The first config found, or the default config if none exists
///
/// # Errors
///
/// This function may return an error if a config file exists but cannot be
/// read or parsed.
#[inline]
pub fn discover_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            debug!("Using config file {}", config_file.display());
            return Config::from_file(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
