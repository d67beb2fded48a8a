//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - Mock [`PredictionSource`](crate::port::outbound::PredictionSource)
//!   implementations: `ScriptedSource`, `StaticSource`, `FailingSource`.
//! - [`domain`] - Builder for prediction records.

pub mod domain;
pub mod source;
