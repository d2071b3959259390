mod http_prober;
mod job_scheduler_client;
mod metrics_collector;
mod name_resolver;

pub use http_prober::HttpProber;
pub use job_scheduler_client::JobSchedulerClient;
pub use metrics_collector::MetricsCollector;
pub use name_resolver::{NameResolver, ResolverTarget};
