//! Frontend configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timetravel.toml";

/// Configuration for the terminal frontend.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// File the tracing output is written to.
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"info"`).
    log_filter: String,

    /// Capture mouse clicks.
    mouse: bool,

    /// How long to wait for input before redrawing, in milliseconds.
    poll_interval_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("strictly_timetravel.log"),
            log_filter: "info".to_string(),
            mouse: true,
            poll_interval_ms: 100,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::new(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::new("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(TuiConfig::from_toml("").unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = TuiConfig::from_toml("mouse = false\npoll_interval_ms = 250\n").unwrap();
        assert!(!config.mouse());
        assert_eq!(*config.poll_interval_ms(), 250);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let err = TuiConfig::from_toml("poll_interval_ms = 0").unwrap_err();
        assert!(err.message.contains("poll_interval_ms"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TuiConfig::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_setters_override() {
        let config = TuiConfig::default()
            .with_mouse(false)
            .with_log_file(PathBuf::from("other.log"));
        assert!(!config.mouse());
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }
}
