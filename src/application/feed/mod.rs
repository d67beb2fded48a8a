//! Prediction feed controller.
//!
//! Owns the current [`Snapshot`] and the active [`FilterCriteria`], and
//! derives the filtered view and aggregates from them. A controller is built
//! when a view mounts and dropped when it unmounts; scheduling lives in
//! [`poller`].

pub mod poller;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::{
    butcher_selections, ensure_unique_ids, FeedAggregates, FilterCriteria, Prediction,
    PredictionId, Snapshot,
};
use crate::error::FeedFetchError;
use crate::port::outbound::PredictionSource;

pub use poller::{FeedPoller, PollerHandle};

/// What a refresh did to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched records replaced the snapshot.
    Live { count: usize },
    /// The fetch failed and the fallback set replaced the snapshot.
    Fallback { error: FeedFetchError },
}

impl RefreshOutcome {
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }
}

/// Everything a renderer needs, derived from a single snapshot.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub snapshot: Arc<Snapshot>,
    pub criteria: FilterCriteria,
    /// Records passing `criteria`, in snapshot order.
    pub visible: Vec<Prediction>,
    /// Computed over the whole snapshot.
    pub aggregates: FeedAggregates,
}

/// Refresh counters, for logs and status lines only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub refreshes: u64,
    pub failures: u64,
    pub consecutive_failures: u64,
}

/// Holds the prediction snapshot and the filter applied to it.
pub struct FeedController {
    source: Arc<dyn PredictionSource>,
    fallback: Vec<Prediction>,
    snapshot: watch::Sender<Arc<Snapshot>>,
    filter: RwLock<FilterCriteria>,
    refreshes: AtomicU64,
    failures: AtomicU64,
    consecutive_failures: AtomicU64,
}

impl FeedController {
    /// Create a controller with an empty pending snapshot, the bundled
    /// fallback set, and an all-pass filter.
    #[must_use]
    pub fn new(source: Arc<dyn PredictionSource>) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Snapshot::pending()));
        Self {
            source,
            fallback: butcher_selections(),
            snapshot,
            filter: RwLock::new(FilterCriteria::default()),
            refreshes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            consecutive_failures: AtomicU64::new(0),
        }
    }

    /// Replace the fallback set substituted on fetch failure.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<Prediction>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Start with the given filter instead of the all-pass default.
    #[must_use]
    pub fn with_filter(self, criteria: FilterCriteria) -> Self {
        *self.filter.write() = criteria;
        self
    }

    /// Fetch from the source and swap in a new snapshot.
    ///
    /// Never fails: on any fetch error the fallback set is swapped in and
    /// the error is logged and returned inside the outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let started = Instant::now();
        let result = self.source.fetch().await.and_then(|predictions| {
            ensure_unique_ids(&predictions)
                .map_err(|e| FeedFetchError::new(self.source.describe(), e.to_string()))?;
            Ok(predictions)
        });
        self.refreshes.fetch_add(1, Ordering::Relaxed);

        match result {
            Ok(predictions) => {
                let count = predictions.len();
                let recovered = self.consecutive_failures.swap(0, Ordering::Relaxed);
                if recovered > 0 {
                    info!(
                        source = %self.source.describe(),
                        failures = recovered,
                        "Prediction feed recovered"
                    );
                }
                self.publish(Snapshot::live(predictions, Utc::now()));
                debug!(
                    count,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Prediction snapshot refreshed"
                );
                RefreshOutcome::Live { count }
            }
            Err(error) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                let consecutive = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
                warn!(
                    endpoint = %error.endpoint,
                    reason = %error.reason,
                    consecutive_failures = consecutive,
                    "Error fetching predictions, showing fallback set"
                );
                self.publish(Snapshot::fallback(self.fallback.clone(), Utc::now()));
                RefreshOutcome::Fallback { error }
            }
        }
    }

    fn publish(&self, snapshot: Snapshot) {
        self.snapshot.send_replace(Arc::new(snapshot));
    }

    /// The snapshot currently held.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// Receiver notified on every snapshot replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.snapshot.subscribe()
    }

    /// The active filter criteria.
    #[must_use]
    pub fn filter(&self) -> FilterCriteria {
        self.filter.read().clone()
    }

    /// Replace the active filter criteria.
    pub fn set_filter(&self, criteria: FilterCriteria) {
        debug!(filter = %criteria, "Filter updated");
        *self.filter.write() = criteria;
    }

    /// Records of the current snapshot passing the active filter, in
    /// snapshot order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Prediction> {
        let snapshot = self.snapshot();
        self.filter.read().apply(snapshot.predictions())
    }

    /// Aggregates over the whole current snapshot, ignoring the filter.
    #[must_use]
    pub fn aggregates(&self) -> FeedAggregates {
        FeedAggregates::compute(self.snapshot().predictions())
    }

    /// Look a record up in the current snapshot.
    #[must_use]
    pub fn find(&self, id: &PredictionId) -> Option<Prediction> {
        self.snapshot().find(id).cloned()
    }

    /// Filtered view and aggregates taken from the same snapshot, so a
    /// concurrent refresh cannot make them disagree.
    #[must_use]
    pub fn view(&self) -> FeedView {
        let snapshot = self.snapshot();
        let criteria = self.filter();
        let visible = criteria.apply(snapshot.predictions());
        let aggregates = FeedAggregates::compute(snapshot.predictions());
        FeedView {
            snapshot,
            criteria,
            visible,
            aggregates,
        }
    }

    #[must_use]
    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            refreshes: self.refreshes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            consecutive_failures: self.consecutive_failures.load(Ordering::Relaxed),
        }
    }

    /// Label of the underlying source.
    #[must_use]
    pub fn source_label(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SnapshotOrigin, TierFilter};
    use crate::testkit::domain::prediction;
    use crate::testkit::source::{FailingSource, ScriptedSource};
    use rust_decimal_macros::dec;

    fn ids(predictions: &[Prediction]) -> Vec<String> {
        predictions.iter().map(|p| p.id.to_string()).collect()
    }

    #[tokio::test]
    async fn starts_pending_and_empty() {
        let controller = FeedController::new(Arc::new(ScriptedSource::new(vec![])));
        let snapshot = controller.snapshot();
        assert!(snapshot.is_pending());
        assert!(controller.filtered_view().is_empty());
        assert_eq!(controller.aggregates(), FeedAggregates::default());
    }

    #[tokio::test]
    async fn successful_refresh_replaces_snapshot() {
        let records = vec![
            prediction("p-1").sport("nhl").edge(dec!(0.05)).build(),
            prediction("p-2").sport("nba").edge(dec!(0.40)).build(),
        ];
        let source = ScriptedSource::new(vec![Ok(records.clone())]);
        let controller = FeedController::new(Arc::new(source));

        let outcome = controller.refresh().await;

        assert_eq!(outcome, RefreshOutcome::Live { count: 2 });
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.origin(), SnapshotOrigin::Live);
        assert_eq!(snapshot.predictions(), records.as_slice());
        assert!(snapshot.refreshed_at().is_some());
    }

    #[tokio::test]
    async fn failed_refresh_substitutes_fallback_exactly() {
        let controller = FeedController::new(Arc::new(FailingSource::new("connection refused")));

        let outcome = controller.refresh().await;

        assert!(matches!(outcome, RefreshOutcome::Fallback { .. }));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.origin(), SnapshotOrigin::Fallback);
        assert_eq!(
            ids(snapshot.predictions()),
            vec!["bb-001", "bb-002", "bb-003", "bb-004", "bb-005"]
        );
        assert_eq!(snapshot.predictions(), butcher_selections().as_slice());
    }

    #[tokio::test]
    async fn failure_discards_previous_live_set() {
        let live = vec![prediction("live-1").build()];
        let source = ScriptedSource::new(vec![
            Ok(live),
            Err(FeedFetchError::new("scripted", "boom")),
        ]);
        let controller = FeedController::new(Arc::new(source));

        controller.refresh().await;
        assert_eq!(ids(controller.snapshot().predictions()), vec!["live-1"]);

        controller.refresh().await;
        let after = controller.snapshot();
        assert!(after.find(&PredictionId::new("live-1")).is_none());
        assert_eq!(after.len(), 5);
    }

    #[tokio::test]
    async fn duplicate_ids_are_treated_as_fetch_failure() {
        let records = vec![prediction("dup").build(), prediction("dup").build()];
        let controller =
            FeedController::new(Arc::new(ScriptedSource::new(vec![Ok(records)])));

        let outcome = controller.refresh().await;

        match outcome {
            RefreshOutcome::Fallback { error } => assert!(error.reason.contains("dup")),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_fallback_is_used() {
        let fallback = vec![prediction("only").build()];
        let controller = FeedController::new(Arc::new(FailingSource::new("down")))
            .with_fallback(fallback.clone());

        controller.refresh().await;

        assert_eq!(controller.snapshot().predictions(), fallback.as_slice());
    }

    #[tokio::test]
    async fn filtered_view_follows_filter_and_preserves_order() {
        let controller = FeedController::new(Arc::new(FailingSource::new("down")));
        controller.refresh().await;

        controller.set_filter(FilterCriteria::default().with_sport("nba".parse().unwrap()));
        assert_eq!(
            ids(&controller.filtered_view()),
            vec!["bb-001", "bb-003", "bb-005"]
        );

        controller.set_filter(FilterCriteria::default().with_min_edge(dec!(0.20)));
        assert_eq!(ids(&controller.filtered_view()), vec!["bb-001", "bb-003"]);
    }

    #[tokio::test]
    async fn set_filter_is_idempotent() {
        let controller = FeedController::new(Arc::new(FailingSource::new("down")));
        controller.refresh().await;
        let criteria = FilterCriteria::default()
            .with_tier(TierFilter::Only(crate::domain::ConfidenceTier::Demolition));

        controller.set_filter(criteria.clone());
        let once = controller.filtered_view();
        controller.set_filter(criteria.clone());
        let twice = controller.filtered_view();

        assert_eq!(once, twice);
        assert_eq!(controller.filter(), criteria);
    }

    #[tokio::test]
    async fn aggregates_ignore_the_filter() {
        let controller = FeedController::new(Arc::new(FailingSource::new("down")));
        controller.refresh().await;
        controller.set_filter(FilterCriteria::default().with_sport("nfl".parse().unwrap()));

        let agg = controller.aggregates();

        assert_eq!(controller.filtered_view().len(), 2);
        assert_eq!(agg.count, 5);
        assert_eq!(agg.execution_count, 1);
        assert_eq!(agg.demolition_count, 2);
    }

    #[tokio::test]
    async fn empty_live_snapshot_has_empty_view_and_zero_aggregates() {
        let controller =
            FeedController::new(Arc::new(ScriptedSource::new(vec![Ok(Vec::new())])));
        controller.refresh().await;
        controller.set_filter(FilterCriteria::default().with_min_edge(dec!(-1)));

        assert!(controller.filtered_view().is_empty());
        assert_eq!(controller.aggregates(), FeedAggregates::default());
        assert_eq!(controller.snapshot().origin(), SnapshotOrigin::Live);
    }

    #[tokio::test]
    async fn subscribers_see_each_replacement() {
        let source = ScriptedSource::new(vec![
            Ok(vec![prediction("a").build()]),
            Ok(vec![prediction("b").build()]),
        ]);
        let controller = FeedController::new(Arc::new(source));
        let mut rx = controller.subscribe();

        controller.refresh().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(ids(rx.borrow_and_update().predictions()), vec!["a"]);

        controller.refresh().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(ids(rx.borrow_and_update().predictions()), vec!["b"]);
    }

    #[tokio::test]
    async fn stats_track_failures_and_recovery() {
        let source = ScriptedSource::new(vec![
            Err(FeedFetchError::new("scripted", "one")),
            Err(FeedFetchError::new("scripted", "two")),
            Ok(vec![prediction("back").build()]),
        ]);
        let controller = FeedController::new(Arc::new(source));

        controller.refresh().await;
        controller.refresh().await;
        assert_eq!(controller.stats().consecutive_failures, 2);

        controller.refresh().await;
        assert_eq!(
            controller.stats(),
            RefreshStats {
                refreshes: 3,
                failures: 2,
                consecutive_failures: 0,
            }
        );
    }

    #[tokio::test]
    async fn find_returns_clone_from_current_snapshot() {
        let controller = FeedController::new(Arc::new(FailingSource::new("down")));
        controller.refresh().await;
        let found = controller.find(&PredictionId::new("bb-002")).unwrap();
        assert_eq!(found.subject, "Josh Allen");
    }

    #[tokio::test]
    async fn view_filters_and_aggregates_one_snapshot() {
        let controller = FeedController::new(Arc::new(FailingSource::new("down")))
            .with_filter(FilterCriteria::default().with_tier(TierFilter::Only(
                crate::domain::ConfidenceTier::Meat,
            )));
        controller.refresh().await;

        let view = controller.view();
        assert_eq!(ids(&view.visible), vec!["bb-004", "bb-005"]);
        assert_eq!(view.aggregates.count, 5);
        assert_eq!(view.snapshot.origin(), SnapshotOrigin::Fallback);
        assert_eq!(view.criteria, controller.filter());
    }
}
