use super::Adapters;
use radix_canary_api::ProbeUseCases;
use radix_canary_application::services::BearerTokenGate;
use radix_canary_application::use_cases::{
    StartJobBatchUseCase, TestExternalWebsiteUseCase, TestInternalDnsUseCase,
    TestJobSchedulerUseCase, TestPublicDnsUseCase, TestRadixSiteUseCase,
};
use radix_canary_domain::Config;
use std::sync::Arc;
use tracing::warn;

pub struct UseCases {
    pub probes: ProbeUseCases,
    pub start_job_batch: Arc<StartJobBatchUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Self {
        let probe = &config.probe;

        if config.auth.secret.is_none() {
            warn!("No batch-start password configured, every /startjobbatch request will be rejected");
        }

        Self {
            probes: ProbeUseCases {
                internal_dns: Arc::new(TestInternalDnsUseCase::new(
                    adapters.resolver.clone(),
                    probe.domains.clone(),
                )),
                public_dns: Arc::new(TestPublicDnsUseCase::new(
                    adapters.resolver.clone(),
                    probe.domains.clone(),
                    probe.dns_servers.clone(),
                )),
                job_scheduler: Arc::new(TestJobSchedulerUseCase::new(
                    adapters.prober.clone(),
                    config.job_scheduler.jobs_url(),
                )),
                external_website: Arc::new(TestExternalWebsiteUseCase::new(
                    adapters.prober.clone(),
                    probe.domains.clone(),
                )),
                radix_site: Arc::new(TestRadixSiteUseCase::new(
                    adapters.prober.clone(),
                    config.site.clone(),
                )),
            },
            start_job_batch: Arc::new(StartJobBatchUseCase::new(
                BearerTokenGate::new(config.auth.secret.clone()),
                adapters.job_scheduler.clone(),
                config.job_scheduler.batches_url(),
                config.job_scheduler.batch.clone(),
            )),
        }
    }
}
