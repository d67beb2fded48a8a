//! Prediction feed domain: records, filters, aggregates, snapshots.

pub mod aggregate;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod id;
pub mod prediction;
pub mod snapshot;

pub use aggregate::{as_percent, FeedAggregates};
pub use fallback::butcher_selections;
pub use filter::{parse_min_edge, FilterCriteria, SportFilter, TierFilter};
pub use id::PredictionId;
pub use prediction::{ConfidenceTier, Prediction, Recommendation, Sport};
pub use snapshot::{ensure_unique_ids, Snapshot, SnapshotOrigin};
