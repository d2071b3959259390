pub mod echo;
pub mod metrics;

pub use echo::EchoResponse;
pub use metrics::MetricLabels;
