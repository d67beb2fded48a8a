//! Outbound adapters (driven side): prediction sources.

pub mod http;
pub mod sample;

pub use http::{HttpPredictionSource, PredictionDto};
pub use sample::SamplePredictionSource;
