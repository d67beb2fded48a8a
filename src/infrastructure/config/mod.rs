//! Infrastructure configuration modules.

pub mod feed;
pub mod logging;
pub mod settings;
