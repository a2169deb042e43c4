//! Flightfee Core - Core library for flight fee summaries
//!
//! This crate reads a plans document (a JSON object with a `plans`
//! sequence) and renders a one-line-per-plan fee summary.

pub mod config;
pub mod error;
pub mod plan;
pub mod report;

pub use config::{Config, ConfigOverrides, OutputConfig, RouteConfig};
pub use error::{Error, Result};
pub use plan::{parse_document, plans, PlanBreakdown, PlanLine};
pub use report::{summarize, FeeReport};
