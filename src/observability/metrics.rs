//! Operation metrics for the directory service.
//!
//! Counters are shared between clones of a [`MetricsTracker`], so the
//! binary can keep a handle and report a summary at shutdown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for directory operations.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    queries_total: Arc<AtomicU64>,
    mutations_total: Arc<AtomicU64>,
    rejected_mutations_total: Arc<AtomicU64>,
    lookup_misses_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            queries_total: Arc::new(AtomicU64::new(0)),
            mutations_total: Arc::new(AtomicU64::new(0)),
            rejected_mutations_total: Arc::new(AtomicU64::new(0)),
            lookup_misses_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a read-only operation.
    pub fn track_query(&self, operation: &str, result_count: usize) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            operation = %operation,
            result_count = result_count,
            "Query completed"
        );
    }

    /// Track a write operation. `accepted` is false when it was rejected.
    pub fn track_mutation(&self, operation: &str, accepted: bool) {
        self.mutations_total.fetch_add(1, Ordering::Relaxed);

        if accepted {
            tracing::info!(operation = %operation, "Mutation applied");
        } else {
            self.rejected_mutations_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(operation = %operation, "Mutation rejected");
        }
    }

    /// Track a lookup by name that found nothing.
    pub fn track_lookup_miss(&self, operation: &str) {
        self.lookup_misses_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(operation = %operation, "No contact with that name");
    }

    /// Get the total number of queries.
    pub fn queries_total(&self) -> u64 {
        self.queries_total.load(Ordering::Relaxed)
    }

    /// Get the total number of mutations, rejected ones included.
    pub fn mutations_total(&self) -> u64 {
        self.mutations_total.load(Ordering::Relaxed)
    }

    /// Get the number of rejected mutations.
    pub fn rejected_mutations_total(&self) -> u64 {
        self.rejected_mutations_total.load(Ordering::Relaxed)
    }

    /// Get the number of name lookups that found nothing.
    pub fn lookup_misses_total(&self) -> u64 {
        self.lookup_misses_total.load(Ordering::Relaxed)
    }

    /// Get the mutation rejection rate (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected_mutations_total() as f64;
        let total = self.mutations_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Queries: {}\n\
             Mutations: {}\n\
             Rejected Mutations: {} ({:.2}% rejection rate)\n\
             Lookup Misses: {}",
            self.queries_total(),
            self.mutations_total(),
            self.rejected_mutations_total(),
            self.rejection_rate() * 100.0,
            self.lookup_misses_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in microseconds.
    pub fn finish(self) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::debug!(
            operation = %self.operation,
            duration_us = duration_us,
            "Operation completed"
        );

        duration_us
    }
}
