//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`outbound::PredictionSource`] - Where today's predictions come from
//!   (HTTP endpoint, bundled sample set, scripted test sources)

pub mod outbound;
