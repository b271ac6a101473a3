//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line flags.

use adapter_records::calendar::{resolve_timezone, DEFAULT_TIMEZONE};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "regwindow.toml";

/// Environment variable overriding the timezone.
pub const ENV_TIMEZONE: &str = "REGWINDOW_TIMEZONE";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "REGWINDOW_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidOutputFormat(String),

    #[error("Invalid timezone: {0}. Must be an IANA name such as America/New_York")]
    InvalidTimezone(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// IANA timezone in which "today" is resolved
    pub timezone: String,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format for command results
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            log_level: LogLevel::Info,
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timezone) = lookup(ENV_TIMEZONE) {
            self.timezone = timezone;
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        Ok(())
    }

    /// Merge with command-line overrides (flags take precedence)
    pub fn merge_with_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(timezone) = &overrides.timezone {
            self.timezone = timezone.clone();
        }
        if let Some(log_level) = &overrides.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &overrides.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Resolve the configured timezone
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        resolve_timezone(&self.timezone)
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tz().map(|_| ())
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Timezone override
    pub timezone: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line flags
/// 2. Environment variables
/// 3. Config file (`--config`, else `regwindow.toml` if present)
/// 4. Default values
pub fn build_config(overrides: &ConfigOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with_env(overrides, |key| std::env::var(key).ok())
}

fn build_config_with_env<F>(overrides: &ConfigOverrides, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    let mut config = match &overrides.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if default_file.is_file() => CliConfig::from_file(default_file)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_overrides(overrides)?;
    config.validate()?;

    Ok(config)
}
