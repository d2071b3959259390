use super::url_returns_200;
use crate::ports::HttpProber;
use radix_canary_domain::ProbeOutcome;
use std::sync::Arc;
use tracing::instrument;

pub struct TestJobSchedulerUseCase {
    prober: Arc<dyn HttpProber>,
    jobs_url: String,
}

impl TestJobSchedulerUseCase {
    pub fn new(prober: Arc<dyn HttpProber>, jobs_url: String) -> Self {
        Self { prober, jobs_url }
    }

    #[instrument(skip(self), name = "probe_job_scheduler", fields(url = %self.jobs_url))]
    pub async fn execute(&self) -> ProbeOutcome {
        if url_returns_200(self.prober.as_ref(), &self.jobs_url).await {
            ProbeOutcome::passed(1)
        } else {
            ProbeOutcome::failed(1)
        }
    }
}
