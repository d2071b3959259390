use crate::dto::MetricLabels;
use radix_canary_application::ports::MetricsCollector;
use radix_canary_application::use_cases::{
    StartJobBatchUseCase, TestExternalWebsiteUseCase, TestInternalDnsUseCase,
    TestJobSchedulerUseCase, TestPublicDnsUseCase, TestRadixSiteUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProbeUseCases {
    pub internal_dns: Arc<TestInternalDnsUseCase>,
    pub public_dns: Arc<TestPublicDnsUseCase>,
    pub job_scheduler: Arc<TestJobSchedulerUseCase>,
    pub external_website: Arc<TestExternalWebsiteUseCase>,
    pub radix_site: Arc<TestRadixSiteUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub probes: ProbeUseCases,
    pub start_job_batch: Arc<StartJobBatchUseCase>,
    /// Request and error counters, shared by every handler for the life of the process.
    pub metrics: Arc<dyn MetricsCollector>,
    pub metric_labels: Arc<MetricLabels>,
}
