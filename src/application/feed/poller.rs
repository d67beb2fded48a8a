//! Periodic refresh scheduling for a [`FeedController`].
//!
//! The poller refreshes immediately on start and then once per period.
//! Refreshes run one at a time on the poller task; ticks that come due
//! while a refresh is in flight are skipped, not queued.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::FeedController;

/// Spawns the polling task.
pub struct FeedPoller;

impl FeedPoller {
    /// Start polling `controller` every `period`.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(controller: Arc<FeedController>, period: Duration) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            info!(
                source = %controller.source_label(),
                period_secs = period.as_secs_f64(),
                "Prediction polling started"
            );

            loop {
                tokio::select! {
                    result = shutdown_rx.changed() => {
                        match result {
                            Ok(()) => {
                                if *shutdown_rx.borrow() {
                                    break;
                                }
                            }
                            Err(_) => break,
                        }
                    }
                    _ = interval.tick() => {
                        controller.refresh().await;
                    }
                    Some(()) = refresh_rx.recv() => {
                        debug!("Manual refresh requested");
                        controller.refresh().await;
                        interval.reset();
                    }
                }
            }

            info!("Prediction polling stopped");
        });

        PollerHandle {
            shutdown_tx,
            refresh_tx,
            task: Some(task),
        }
    }
}

/// Control handle for a running poller.
///
/// Dropping the handle stops polling; [`PollerHandle::shutdown`] stops it
/// and waits for the task to finish.
pub struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    refresh_tx: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Ask for an immediate refresh outside the schedule.
    ///
    /// Returns `false` when a manual refresh is already queued or the
    /// poller has stopped.
    pub fn refresh_now(&self) -> bool {
        self.refresh_tx.try_send(()).is_ok()
    }

    /// Stop polling and wait for any in-flight refresh to complete.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
