//! Observability for shoe card rendering.
//!
//! This crate provides:
//! - `RenderId` - Identifier correlating the logs and metrics of one render run
//! - `StructuredLogger` - Structured logging with run context
//! - `MetricsCollector` - Per-card timings and variant counts

mod id;
mod logging;
mod metrics;

pub use id::*;
pub use logging::*;
pub use metrics::*;
