//! Bookie Butcher - a polling feed of player prop predictions.
//!
//! Predictions are fetched from an HTTP endpoint on an interval. When a fetch
//! fails, a bundled set of selections is shown in its place so the views are
//! never empty. Two terminal views consume the same feed controller: a full
//! dashboard and a compact card screen.
//!
//! # Modules
//!
//! - [`domain`] - Predictions, filter criteria, aggregates, snapshots
//! - [`port`] - The [`port::outbound::PredictionSource`] boundary
//! - [`application`] - [`application::feed::FeedController`] and its poller
//! - [`adapter`] - HTTP and sample sources; the `butcher` CLI
//! - [`infrastructure`] - TOML configuration, logging, wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use bookie_butcher::adapter::outbound::SamplePredictionSource;
//! use bookie_butcher::application::feed::{FeedController, FeedPoller};
//!
//! # async fn demo() {
//! let source = Arc::new(SamplePredictionSource::new(Duration::from_millis(1000)));
//! let controller = Arc::new(FeedController::new(source));
//! let poller = FeedPoller::start(Arc::clone(&controller), Duration::from_secs(5));
//!
//! let mut updates = controller.subscribe();
//! updates.changed().await.ok();
//! println!("{} predictions", controller.view().visible.len());
//!
//! poller.shutdown().await;
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
