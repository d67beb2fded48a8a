//! Prediction feed REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::dto::PredictionDto;
use crate::domain::Prediction;
use crate::error::{FeedFetchError, Result};
use crate::port::outbound::PredictionSource;

/// Fetches predictions from an HTTP endpoint.
///
/// Transport errors, non-2xx responses, and bodies that are not a JSON array
/// of predictions all surface as [`FeedFetchError`].
pub struct HttpPredictionSource {
    client: Client,
    endpoint: String,
}

impl HttpPredictionSource {
    /// Create a source for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn failure(&self, reason: impl Into<String>) -> FeedFetchError {
        FeedFetchError::new(&self.endpoint, reason)
    }
}

#[async_trait]
impl PredictionSource for HttpPredictionSource {
    async fn fetch(&self) -> std::result::Result<Vec<Prediction>, FeedFetchError> {
        debug!(url = %self.endpoint, "Fetching predictions");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure(format!("unexpected status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.failure(format!("failed to read body: {e}")))?;

        let dtos: Vec<PredictionDto> = serde_json::from_slice(&body)
            .map_err(|e| self.failure(format!("malformed body: {e}")))?;

        let predictions: Vec<Prediction> = dtos.into_iter().map(Prediction::from).collect();
        debug!(count = predictions.len(), "Fetched predictions");

        Ok(predictions)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
