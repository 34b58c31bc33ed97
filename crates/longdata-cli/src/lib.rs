//! CLI library components for the longevity lookups.

pub mod logging;
pub mod settings;
pub mod summary;
