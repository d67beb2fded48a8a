//! Feed controller and poller behavior through the public API.

use std::sync::Arc;
use std::time::Duration;

use bookie_butcher::application::feed::{FeedController, FeedPoller, RefreshOutcome};
use bookie_butcher::domain::{
    butcher_selections, ConfidenceTier, FeedAggregates, FilterCriteria, Prediction,
    SnapshotOrigin, Sport, SportFilter, TierFilter,
};
use bookie_butcher::error::FeedFetchError;
use bookie_butcher::testkit::domain::prediction;
use bookie_butcher::testkit::source::{FailingSource, ScriptedSource, StaticSource};
use rust_decimal_macros::dec;

fn subjects(predictions: &[Prediction]) -> Vec<&str> {
    predictions.iter().map(|p| p.subject.as_str()).collect()
}

async fn fallback_controller() -> FeedController {
    let controller = FeedController::new(Arc::new(FailingSource::new("offline")));
    controller.refresh().await;
    controller
}

#[tokio::test]
async fn nba_filter_keeps_three_in_order() {
    let controller = fallback_controller().await;
    controller.set_filter(
        FilterCriteria::default().with_sport(SportFilter::Only(Sport::try_new("nba").unwrap())),
    );

    assert_eq!(
        subjects(&controller.filtered_view()),
        ["LeBron James", "Victor Wembanyama", "Cade Cunningham"]
    );
}

#[tokio::test]
async fn min_edge_twenty_percent() {
    let controller = fallback_controller().await;
    controller.set_filter(FilterCriteria::default().with_min_edge(dec!(0.20)));

    assert_eq!(
        subjects(&controller.filtered_view()),
        ["LeBron James", "Victor Wembanyama"]
    );
}

#[tokio::test]
async fn empty_snapshot_yields_empty_view_and_zero_aggregates() {
    let controller = FeedController::new(Arc::new(StaticSource::new(Vec::new())));
    assert!(controller.refresh().await.is_live());
    controller.set_filter(
        FilterCriteria::default().with_tier(TierFilter::Only(ConfidenceTier::Execution)),
    );

    assert!(controller.filtered_view().is_empty());
    assert_eq!(controller.aggregates(), FeedAggregates::default());
}

#[tokio::test]
async fn aggregates_ignore_the_filter() {
    let controller = fallback_controller().await;
    let unfiltered = controller.aggregates();
    controller.set_filter(FilterCriteria::default().with_min_edge(dec!(0.99)));

    assert_eq!(controller.aggregates(), unfiltered);
    assert_eq!(unfiltered.count, 5);
    assert_eq!(unfiltered.execution_count, 1);
    assert_eq!(unfiltered.demolition_count, 2);
    assert_eq!(unfiltered.mean_edge, dec!(0.2));
    assert_eq!(unfiltered.mean_confidence, dec!(0.83));
}

#[tokio::test]
async fn means_stay_within_field_range() {
    let records = vec![
        prediction("a").edge(dec!(-0.05)).confidence(dec!(0.51)).build(),
        prediction("b").edge(dec!(0.40)).confidence(dec!(0.97)).build(),
        prediction("c").edge(dec!(0.07)).confidence(dec!(0.60)).build(),
    ];
    let controller = FeedController::new(Arc::new(StaticSource::new(records)));
    controller.refresh().await;

    let aggregates = controller.aggregates();
    assert_eq!(aggregates.count, 3);
    assert!(aggregates.mean_edge >= dec!(-0.05) && aggregates.mean_edge <= dec!(0.40));
    assert!(aggregates.mean_confidence >= dec!(0.51) && aggregates.mean_confidence <= dec!(0.97));
}

#[tokio::test]
async fn setting_the_same_filter_twice_is_idempotent() {
    let controller = fallback_controller().await;
    let criteria = FilterCriteria::default()
        .with_tier(TierFilter::Only(ConfidenceTier::Demolition))
        .with_min_edge(dec!(0.2));

    controller.set_filter(criteria.clone());
    let once = controller.filtered_view();
    controller.set_filter(criteria);
    assert_eq!(controller.filtered_view(), once);
    assert_eq!(subjects(&once), ["Victor Wembanyama"]);
}

#[tokio::test]
async fn failure_substitutes_the_fallback_set() {
    let source = ScriptedSource::new(vec![
        Ok(vec![prediction("live-1").build()]),
        Err(FeedFetchError::new("scripted", "timeout")),
    ]);
    let controller = FeedController::new(Arc::new(source));

    assert_eq!(controller.refresh().await, RefreshOutcome::Live { count: 1 });
    let outcome = controller.refresh().await;
    assert!(matches!(outcome, RefreshOutcome::Fallback { .. }));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.origin(), SnapshotOrigin::Fallback);
    assert_eq!(snapshot.predictions(), butcher_selections().as_slice());
}

#[tokio::test(start_paused = true)]
async fn poller_recovers_on_next_cycle() {
    let source = Arc::new(ScriptedSource::new(vec![
        Err(FeedFetchError::new("scripted", "down")),
        Ok(vec![prediction("back").build()]),
    ]));
    let controller = Arc::new(FeedController::new(source.clone()));
    let mut updates = controller.subscribe();
    let poller = FeedPoller::start(Arc::clone(&controller), Duration::from_secs(5));

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().origin(), SnapshotOrigin::Fallback);

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.origin(), SnapshotOrigin::Live);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(source.calls(), 2);

    poller.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_poller_stops_refreshes() {
    let source = Arc::new(StaticSource::fallback_set());
    let controller = Arc::new(FeedController::new(source.clone()));
    let poller = FeedPoller::start(Arc::clone(&controller), Duration::from_secs(5));

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(source.calls(), 1);
    drop(poller);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(source.calls(), 1);
}
