use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory the monolingual files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Reader settings
    #[serde(default)]
    pub readers: ReaderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the built-in bundle readers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReaderConfig {
    /// File extensions handled by the JSON bundle reader
    #[serde(default = "default_json_extensions")]
    pub json_extensions: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            json_extensions: default_json_extensions(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_json_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

impl Config {
    /// Load configuration from a JSON file, or defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(anyhow!(
                "Output path exists but is not a directory: {}",
                self.output_dir.display()
            ));
        }

        if self.readers.json_extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("Reader extensions must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            readers: ReaderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
