//! Configuration for imcite-core
//!
//! Settings for the report export, usage analytics and log filtering. Every
//! section has defaults, so a config file only needs the values it changes.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// System-wide configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImciteConfig {
    /// Text report settings
    pub export: ExportConfig,
    /// Usage ranking settings
    pub analytics: AnalyticsConfig,
    /// Log filter settings
    pub logging: LoggingConfig,
}

/// Text report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of the title/name dump
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Output.txt"),
        }
    }
}

/// Usage analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// How many publications the usage ranking returns
    pub top_used_limit: usize,
    /// First day of the analysis window (defaults to the oldest publication)
    pub window_start: Option<NaiveDate>,
    /// Last day of the analysis window (defaults to the newest publication)
    pub window_end: Option<NaiveDate>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_used_limit: 3,
            window_start: None,
            window_end: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ImciteConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.top_used_limit == 0 {
            return Err(ConfigError::OutOfRange(
                "analytics.top_used_limit must be positive".to_string(),
            ));
        }

        if let (Some(start), Some(end)) = (self.analytics.window_start, self.analytics.window_end) {
            if start > end {
                return Err(ConfigError::InvalidWindow { start, end });
            }
        }

        if self.export.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("export.path".to_string()));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Analysis window ends before it starts
    #[error("Invalid analytics window: {start} is after {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Config file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
