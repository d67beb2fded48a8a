//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod source;

pub use source::PredictionSource;
