//! Application configuration
//!
//! Combines the command-line verbosity with the resolved file/environment
//! [`Config`].

use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    pub settings: Config,
    /// Environment overrides that were skipped while loading, logged at startup
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Resolve settings, with `config_path` taking precedence over the global file
    pub fn new(verbose: u8, config_path: Option<&Path>) -> Result<Self> {
        let (settings, warnings) =
            Config::load(config_path).context("Failed to load configuration")?;
        Ok(Self {
            verbose,
            settings,
            warnings,
        })
    }

    /// Override the output format from the command line
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.settings.format = format;
        }
        self
    }

    /// Get the log filter based on verbosity, falling back to the configured level
    pub fn log_level(&self) -> &str {
        match self.verbose {
            0 => self.settings.get_log_level(),
            1 => "debug",
            _ => "trace",
        }
    }
}
