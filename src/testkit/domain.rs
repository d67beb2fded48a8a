//! Builders for domain primitives used across tests.
//!
//! Start from [`prediction`] and override only the fields a test cares
//! about; everything else gets a plausible default.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{ConfidenceTier, Prediction, PredictionId, Recommendation, Sport};

/// Start building a prediction with the given id.
pub fn prediction(id: &str) -> PredictionBuilder {
    PredictionBuilder {
        inner: Prediction {
            id: PredictionId::new(id),
            subject: format!("Player {id}"),
            team: "TST".into(),
            sport: Sport::from_static("nba"),
            stat_category: "Points".into(),
            line_value: dec!(20.5),
            recommendation: Recommendation::Over,
            confidence: dec!(0.75),
            edge_fraction: dec!(0.10),
            confidence_tier: ConfidenceTier::Meat,
            summary: "Test summary".into(),
            rationale: "Test rationale".into(),
            posted_at: DateTime::<Utc>::default(),
        },
    }
}

/// Fluent builder returned by [`prediction`].
pub struct PredictionBuilder {
    inner: Prediction,
}

impl PredictionBuilder {
    pub fn subject(mut self, subject: &str) -> Self {
        self.inner.subject = subject.into();
        self
    }

    /// Panics on an empty label.
    pub fn sport(mut self, sport: &str) -> Self {
        self.inner.sport = Sport::try_new(sport).expect("test sport label");
        self
    }

    pub fn tier(mut self, tier: ConfidenceTier) -> Self {
        self.inner.confidence_tier = tier;
        self
    }

    pub fn edge(mut self, edge: Decimal) -> Self {
        self.inner.edge_fraction = edge;
        self
    }

    pub fn confidence(mut self, confidence: Decimal) -> Self {
        self.inner.confidence = confidence;
        self
    }

    pub fn rationale(mut self, rationale: &str) -> Self {
        self.inner.rationale = rationale.into();
        self
    }

    pub fn build(self) -> Prediction {
        self.inner
    }
}
