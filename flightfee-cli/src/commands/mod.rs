//! CLI command implementations

pub mod config;
pub mod summary;

pub use summary::SummaryArgs;
