//! Prediction feed source and polling configuration.

use serde::Deserialize;
use std::time::Duration;

/// Default endpoint for today's predictions.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/v1/predictions/today";

/// Which source the feed controller pulls from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Live HTTP endpoint.
    #[default]
    Http,
    /// Bundled sample set with simulated latency.
    Sample,
}

/// `[feed]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds between scheduled refreshes.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Per-request timeout for the HTTP source.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Simulated latency for the sample source.
    #[serde(default = "default_sample_latency_ms")]
    pub sample_latency_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_poll_interval_secs() -> u64 {
    5
}

const fn default_request_timeout_secs() -> u64 {
    10
}

const fn default_sample_latency_ms() -> u64 {
    1000
}

impl FeedConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn sample_latency(&self) -> Duration {
        Duration::from_millis(self.sample_latency_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            endpoint: default_endpoint(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            sample_latency_ms: default_sample_latency_ms(),
        }
    }
}
