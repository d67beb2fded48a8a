//! Application services.

pub mod feed;
