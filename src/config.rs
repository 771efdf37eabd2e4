//! Configuration management for recolor
//!
//! recolor reads optional settings from ~/.recolor/config.toml. The file only
//! tunes logging and console output; what gets swapped and where is fixed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// recolor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a debug log file
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colored console output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Context lines around each change in --dry-run previews
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            context_lines: default_context_lines(),
        }
    }
}

// Default functions for serde
fn default_color() -> bool { true }
fn default_context_lines() -> usize { 3 }

const MAX_CONTEXT_LINES: usize = 10;

/// Get the configuration file path
pub fn config_file_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;

    Ok(home_dir.join(".recolor").join("config.toml"))
}

/// Parse and validate configuration text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str).context("Failed to parse config")?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from `path`.
///
/// A missing file means defaults. The file is never created here.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&config_str)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config> {
    load_config_from(&config_file_path()?)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.output.context_lines > MAX_CONTEXT_LINES {
        anyhow::bail!(
            "Invalid context_lines: {} (max {})",
            config.output.context_lines,
            MAX_CONTEXT_LINES
        );
    }

    Ok(())
}
