//! HTTP prediction feed adapter.
//!
//! Fetches today's predictions as a JSON array from a fixed endpoint.

mod client;
mod dto;

pub use client::HttpPredictionSource;
pub use dto::PredictionDto;
