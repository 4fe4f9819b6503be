use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::culture::Culture;
use crate::errors::AppError;

/// Application configuration module
/// This module handles loading and validating the conversion settings.
/// The configuration is created once at startup and shared read-only
/// across all concurrent file pipelines.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Culture whose conventions govern numeric and date parsing
    #[serde(default = "default_source_culture_name")]
    pub source_culture_name: String,

    /// Log each processed file and its culture
    #[serde(default)]
    pub verbose: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
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
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_culture_name() -> String {
    "en-US".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_culture_name: default_source_culture_name(),
            verbose: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load the configuration from a JSON file, substituting the defaults
    /// when the file is missing or malformed. Load problems are logged and
    /// never propagated.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Settings file {} not found ({}), using defaults",
                    path.display(),
                    e
                );
                return Config::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to parse settings file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        Culture::resolve(&self.source_culture_name)?;
        Ok(())
    }
}
