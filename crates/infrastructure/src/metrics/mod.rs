mod counters;

pub use counters::AtomicMetricsCollector;
