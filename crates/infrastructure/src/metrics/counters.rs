use radix_canary_application::ports::MetricsCollector;
use radix_canary_domain::MetricsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters; values only grow and reset with the process.
#[derive(Debug, Default)]
pub struct AtomicMetricsCollector {
    requests_total: AtomicU64,
    errors_total: AtomicU64,
}

impl AtomicMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsCollector for AtomicMetricsCollector {
    fn increment_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_errors(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            errors_total: self.errors_total.load(Ordering::Relaxed),
        }
    }
}
