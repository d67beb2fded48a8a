//! Summary statistics over a full snapshot.

use rust_decimal::Decimal;
use serde::Serialize;

use super::prediction::{ConfidenceTier, Prediction};

/// Aggregates computed over every record in a snapshot, ignoring the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedAggregates {
    /// Number of records.
    pub count: usize,
    /// Records in the EXECUTION tier.
    pub execution_count: usize,
    /// Records in the DEMOLITION tier.
    pub demolition_count: usize,
    /// Arithmetic mean of edge fractions; zero when empty.
    pub mean_edge: Decimal,
    /// Arithmetic mean of confidence scores; zero when empty.
    pub mean_confidence: Decimal,
}

impl FeedAggregates {
    #[must_use]
    pub fn compute(predictions: &[Prediction]) -> Self {
        let count = predictions.len();
        let tier_count = |tier: ConfidenceTier| {
            predictions
                .iter()
                .filter(|p| p.confidence_tier == tier)
                .count()
        };

        Self {
            count,
            execution_count: tier_count(ConfidenceTier::Execution),
            demolition_count: tier_count(ConfidenceTier::Demolition),
            mean_edge: mean(predictions.iter().map(|p| p.edge_fraction)),
            mean_confidence: mean(predictions.iter().map(|p| p.confidence)),
        }
    }
}

/// Arithmetic mean; zero for no values.
///
/// Feed values are not range-checked, so a sum past `Decimal::MAX` switches
/// to summing pre-divided terms instead of panicking.
fn mean(values: impl Iterator<Item = Decimal> + Clone) -> Decimal {
    let count = values.clone().count();
    if count == 0 {
        return Decimal::ZERO;
    }
    let count = Decimal::from(count);
    match values
        .clone()
        .try_fold(Decimal::ZERO, |total, v| total.checked_add(v))
    {
        Some(total) => total / count,
        None => values.fold(Decimal::ZERO, |total, v| total.saturating_add(v / count)),
    }
}

/// Render a fraction as a whole percentage, rounding half away from zero.
/// Saturates at the `Decimal` bounds.
#[must_use]
pub fn as_percent(fraction: Decimal) -> Decimal {
    fraction.saturating_mul(Decimal::ONE_HUNDRED).round_dp_with_strategy(
        0,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}
