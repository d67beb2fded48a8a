//! Prediction source port.

use async_trait::async_trait;

use crate::domain::Prediction;
use crate::error::FeedFetchError;

/// Port for fetching the current day's predictions.
///
/// Each call returns a complete, ordered record set. Implementations do not
/// retry; the caller's polling schedule is the only recovery mechanism.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Fetch the full prediction set.
    async fn fetch(&self) -> Result<Vec<Prediction>, FeedFetchError>;

    /// Short label for logs (endpoint URL or source name).
    fn describe(&self) -> String;
}
