use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub const ENV_TOP_WORDS: &str = "TEXT_ANALYZER_TOP_WORDS";
pub const ENV_LOG_LEVEL: &str = "TEXT_ANALYZER_LOG_LEVEL";
pub const ENV_FORMAT: &str = "TEXT_ANALYZER_FORMAT";

/// Get the per-user directory holding `config.toml`
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "text-analyzer", "text-analyzer")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("unknown output format '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of words listed under the summary report
    pub top_words: usize,
    pub log_level: Option<String>,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_words: 10,
            log_level: None,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from the global file, an optional explicit file
    /// and the environment, in increasing order of precedence.
    ///
    /// Also returns one message per ignored environment value. Logging is not
    /// up yet at this point, so the caller reports them once it is.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Vec<String>)> {
        let mut config = match get_global_config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            config = Self::from_file(path)?;
        }

        let warnings = config.merge_env_vars();
        Ok((config, warnings))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) -> Vec<String> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Unparsable values are skipped and
    /// described in the returned list.
    pub fn merge_from<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut skipped = Vec::new();

        if let Some(top_words) = lookup(ENV_TOP_WORDS) {
            match top_words.parse::<usize>() {
                Ok(value) => self.top_words = value,
                Err(_) => skipped.push(format!(
                    "Ignoring {ENV_TOP_WORDS}={top_words}: not a number"
                )),
            }
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(log_level);
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse::<OutputFormat>() {
                Ok(value) => self.format = value,
                Err(e) => skipped.push(format!("Ignoring {ENV_FORMAT}: {e}")),
            }
        }

        skipped
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
