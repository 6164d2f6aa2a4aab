//! Configuration file parsing and structures.
//!
//! hestia uses TOML for configuration: where the seed device file lives,
//! where the working copy is staged, and how verbose logging should be.
//! Every key has a default so an absent file yields a usable config.

use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

/// Top-level configuration structure
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default)]
    pub level: LogLevel,
}

/// Where device data is read from and staged to
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the seed device file
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Name of the device file
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Directory the working copy is staged into
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            filename: default_filename(),
            working_dir: default_working_dir(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_filename() -> String {
    "smartdevices.csv".to_string()
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().to_path_buf(), e))?;

        toml::from_str(&contents).map_err(ConfigError::Parse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [storage]
            source_dir = "seed"
            filename = "devices.csv"
            working_dir = "/tmp/hestia"

            [logging]
            level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.source_dir, PathBuf::from("seed"));
        assert_eq!(config.storage.filename, "devices.csv");
        assert_eq!(config.storage.working_dir, PathBuf::from("/tmp/hestia"));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.source_dir, PathBuf::from("data"));
        assert_eq!(config.storage.filename, "smartdevices.csv");
        assert_eq!(config.storage.working_dir, PathBuf::from("."));
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_partial_storage_section() {
        let toml = r#"
            [storage]
            filename = "other.csv"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.filename, "other.csv");
        assert_eq!(config.storage.source_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_missing_file_error() {
        let result = Config::from_file("/nonexistent/hestia.toml");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
        assert!(err.to_string().contains("/nonexistent/hestia.toml"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let toml = r#"
            [logging]
            level = "loud"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
