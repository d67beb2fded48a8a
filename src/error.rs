use thiserror::Error;

use crate::domain::error::DomainError;

/// Why a `butcher.toml` could not be turned into a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure to obtain a prediction feed from a source.
///
/// Covers transport failures, non-2xx responses, and bodies that cannot be
/// decoded into predictions. Callers recover from every cause the same way,
/// by substituting fallback data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to fetch predictions from {endpoint}: {reason}")]
pub struct FeedFetchError {
    /// Where the fetch was directed (URL or source label).
    pub endpoint: String,
    /// Human-readable cause.
    pub reason: String,
}

impl FeedFetchError {
    pub fn new(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Feed(#[from] FeedFetchError),

    /// The HTTP client could not be constructed.
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
