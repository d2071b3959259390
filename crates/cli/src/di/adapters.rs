use radix_canary_application::ports::{
    HttpProber, JobSchedulerClient, MetricsCollector, NameResolver,
};
use radix_canary_domain::{Config, DomainError};
use radix_canary_infrastructure::dns::NetworkNameResolver;
use radix_canary_infrastructure::http::{
    build_http_client, HttpJobSchedulerClient, ReqwestHttpProber,
};
use radix_canary_infrastructure::metrics::AtomicMetricsCollector;
use std::sync::Arc;
use tracing::info;

/// Outbound adapters, all bounded by the configured probe timeout.
pub struct Adapters {
    pub resolver: Arc<dyn NameResolver>,
    pub prober: Arc<dyn HttpProber>,
    pub job_scheduler: Arc<dyn JobSchedulerClient>,
    pub metrics: Arc<dyn MetricsCollector>,
}

impl Adapters {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let timeout = config.probe.timeout();
        let http_client = build_http_client(timeout)?;

        info!(
            timeout_secs = config.probe.timeout_secs,
            dns_port = config.probe.dns_port,
            "Outbound adapters configured"
        );

        Ok(Self {
            resolver: Arc::new(NetworkNameResolver::new(config.probe.dns_port, timeout)),
            prober: Arc::new(ReqwestHttpProber::new(http_client.clone(), timeout)),
            job_scheduler: Arc::new(HttpJobSchedulerClient::new(http_client, timeout)),
            metrics: Arc::new(AtomicMetricsCollector::new()),
        })
    }
}
