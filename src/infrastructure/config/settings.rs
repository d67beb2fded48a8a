//! Application configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional and
//! falls back to defaults, so an empty file is a valid configuration. The
//! feed endpoint can be overridden with the `BUTCHER_ENDPOINT` environment
//! variable.
//!
//! # Example
//!
//! ```no_run
//! use bookie_butcher::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("butcher.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::feed::{FeedConfig, SourceKind};
use super::logging::LoggingConfig;
use crate::domain::FilterCriteria;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `feed.endpoint`.
pub const ENDPOINT_ENV: &str = "BUTCHER_ENDPOINT";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "butcher.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Prediction source and polling cadence.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Initial view filter.
    #[serde(default)]
    pub filter: FilterCriteria,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise from `butcher.toml` if it
    /// exists, otherwise defaults.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Self::parse_toml(""),
        }
    }

    fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.feed.endpoint = endpoint.trim().to_string();
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.feed.source == SourceKind::Http {
            if self.feed.endpoint.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "feed.endpoint",
                }
                .into());
            }
            let url = Url::parse(&self.feed.endpoint).map_err(|e| ConfigError::InvalidValue {
                field: "feed.endpoint",
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    field: "feed.endpoint",
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                }
                .into());
            }
        }
        if self.feed.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.poll_interval_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.feed.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.request_timeout_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
