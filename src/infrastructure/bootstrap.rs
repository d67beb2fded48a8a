//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::{HttpPredictionSource, SamplePredictionSource};
use crate::application::feed::FeedController;
use crate::error::Result;
use crate::infrastructure::config::feed::SourceKind;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::PredictionSource;

/// Build the prediction source selected by `[feed] source`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_source(config: &Config) -> Result<Arc<dyn PredictionSource>> {
    let source: Arc<dyn PredictionSource> = match config.feed.source {
        SourceKind::Http => Arc::new(HttpPredictionSource::new(
            config.feed.endpoint.clone(),
            config.feed.request_timeout(),
        )?),
        SourceKind::Sample => Arc::new(SamplePredictionSource::new(config.feed.sample_latency())),
    };
    info!(source = %source.describe(), "Prediction source configured");
    Ok(source)
}

/// Build a feed controller wired to the configured source and filter.
///
/// # Errors
///
/// Returns an error if the source cannot be constructed.
pub fn build_controller(config: &Config) -> Result<Arc<FeedController>> {
    let source = build_source(config)?;
    Ok(Arc::new(
        FeedController::new(source).with_filter(config.filter.clone()),
    ))
}
