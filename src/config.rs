//! Player configuration.
//!
//! Loaded from ./numguess.yml or ~/.config/numguess/numguess.yml

use colored::*;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use numguess::game::InvalidInputPolicy;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level used when RUST_LOG is unset
    #[serde(rename = "log-level")]
    pub log_level: String,

    /// Colorize game output
    pub color: bool,

    /// Handling of lines that are not whole numbers
    #[serde(rename = "invalid-input")]
    pub invalid_input: InvalidInputPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color: true,
            invalid_input: InvalidInputPolicy::Reprompt,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. ./numguess.yml
    /// 3. ~/.config/numguess/numguess.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Ok(Self::load_first(&Self::search_paths()))
    }

    /// Default search paths: ./numguess.yml, then ~/.config/numguess/numguess.yml
    fn search_paths() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let file_name = format!("{}.yml", project_name);

        let mut paths = vec![PathBuf::from(&file_name)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(project_name).join(&file_name));
        }
        paths
    }

    /// Load the first candidate that exists and parses.
    ///
    /// Broken files are skipped with a warning on stderr as well as in the
    /// log, so a typo never silently resets the player's settings.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to load config from {}: {:#}", path.display(), e);
                    eprintln!("{} ignoring config {}: {:#}", "warning:".yellow(), path.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            eyre::bail!("log-level must be one of {:?}, got {:?}", LOG_LEVELS, self.log_level);
        }
        Ok(())
    }
}
