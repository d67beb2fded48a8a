//! Atomically replaced set of predictions.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;
use super::id::PredictionId;
use super::prediction::Prediction;

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotOrigin {
    /// No refresh has completed yet.
    Pending,
    /// Parsed from a successful fetch.
    Live,
    /// Substituted after a failed fetch.
    Fallback,
}

/// The complete set of predictions held at a point in time.
///
/// Never mutated in place; a refresh builds a new snapshot and swaps it in.
#[derive(Debug, Clone)]
pub struct Snapshot {
    predictions: Arc<[Prediction]>,
    origin: SnapshotOrigin,
    refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Empty snapshot used before the first refresh.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            predictions: Arc::from(Vec::new()),
            origin: SnapshotOrigin::Pending,
            refreshed_at: None,
        }
    }

    /// Snapshot built from fetched records.
    #[must_use]
    pub fn live(predictions: Vec<Prediction>, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            predictions: predictions.into(),
            origin: SnapshotOrigin::Live,
            refreshed_at: Some(refreshed_at),
        }
    }

    /// Snapshot built from the static fallback set.
    #[must_use]
    pub fn fallback(predictions: Vec<Prediction>, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            predictions: predictions.into(),
            origin: SnapshotOrigin::Fallback,
            refreshed_at: Some(refreshed_at),
        }
    }

    #[must_use]
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    #[must_use]
    pub fn origin(&self) -> SnapshotOrigin {
        self.origin
    }

    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.origin == SnapshotOrigin::Pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &PredictionId) -> Option<&Prediction> {
        self.predictions.iter().find(|p| &p.id == id)
    }
}

/// Reject record sets that repeat an identifier.
pub fn ensure_unique_ids(predictions: &[Prediction]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(predictions.len());
    for prediction in predictions {
        if !seen.insert(prediction.id.as_str()) {
            return Err(DomainError::DuplicateId {
                id: prediction.id.to_string(),
            });
        }
    }
    Ok(())
}
