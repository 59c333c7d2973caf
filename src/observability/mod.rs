//! Observability module for monitoring and metrics.
//!
//! Operation counters and timing for the directory service, reported
//! through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
