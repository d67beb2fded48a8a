//! Mock [`PredictionSource`] implementations for testing.
//!
//! - [`ScriptedSource`] - Pops pre-loaded results in order; errors once the
//!   script runs out.
//! - [`StaticSource`] - Always returns the same records.
//! - [`FailingSource`] - Always fails with the same reason.
//!
//! Every source counts its `fetch` calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{butcher_selections, Prediction};
use crate::error::FeedFetchError;
use crate::port::outbound::PredictionSource;

type FetchResult = Result<Vec<Prediction>, FeedFetchError>;

/// Source that replays a fixed script of results.
pub struct ScriptedSource {
    script: Mutex<VecDeque<FetchResult>>,
    calls: AtomicU32,
}

impl ScriptedSource {
    pub fn new(script: Vec<FetchResult>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionSource for ScriptedSource {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FeedFetchError::new("scripted", "script exhausted")))
    }

    fn describe(&self) -> String {
        "scripted".into()
    }
}

/// Source that always returns the same records.
pub struct StaticSource {
    records: Vec<Prediction>,
    calls: AtomicU32,
}

impl StaticSource {
    pub fn new(records: Vec<Prediction>) -> Self {
        Self {
            records,
            calls: AtomicU32::new(0),
        }
    }

    /// Serves the bundled five-record set.
    pub fn fallback_set() -> Self {
        Self::new(butcher_selections())
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionSource for StaticSource {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "static".into()
    }
}

/// Source that fails every fetch.
pub struct FailingSource {
    reason: String,
    calls: AtomicU32,
}

impl FailingSource {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.into(),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionSource for FailingSource {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FeedFetchError::new(self.describe(), self.reason.clone()))
    }

    fn describe(&self) -> String {
        "failing".into()
    }
}
