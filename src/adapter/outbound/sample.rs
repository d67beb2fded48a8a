//! Bundled sample source for offline demos.
//!
//! Serves the fallback set after a simulated network delay, so the views
//! behave as if talking to a slow backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{butcher_selections, Prediction};
use crate::error::FeedFetchError;
use crate::port::outbound::PredictionSource;

pub struct SamplePredictionSource {
    latency: Duration,
}

impl SamplePredictionSource {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PredictionSource for SamplePredictionSource {
    async fn fetch(&self) -> Result<Vec<Prediction>, FeedFetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let predictions = butcher_selections();
        debug!(count = predictions.len(), "Served sample predictions");
        Ok(predictions)
    }

    fn describe(&self) -> String {
        "sample".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_latency_then_serves_bundled_set() {
        let source = SamplePredictionSource::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let predictions = source.fetch().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(predictions, butcher_selections());
    }

    #[tokio::test]
    async fn zero_latency_returns_immediately() {
        let source = SamplePredictionSource::new(Duration::ZERO);
        assert_eq!(source.fetch().await.unwrap().len(), 5);
    }
}
