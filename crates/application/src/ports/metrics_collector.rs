use radix_canary_domain::MetricsSnapshot;

/// Process-lifetime request and error counters.
pub trait MetricsCollector: Send + Sync {
    fn increment_requests(&self);

    fn increment_errors(&self);

    fn snapshot(&self) -> MetricsSnapshot;
}
