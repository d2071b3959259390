use super::url_returns_200;
use crate::ports::HttpProber;
use crate::services::first_success;
use radix_canary_domain::ProbeOutcome;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Passes when any of the configured domains answers `https://<domain>` with 200.
pub struct TestExternalWebsiteUseCase {
    prober: Arc<dyn HttpProber>,
    domains: Vec<String>,
}

impl TestExternalWebsiteUseCase {
    pub fn new(prober: Arc<dyn HttpProber>, domains: Vec<String>) -> Self {
        Self { prober, domains }
    }

    #[instrument(skip(self), name = "probe_external_website")]
    pub async fn execute(&self) -> ProbeOutcome {
        let urls: Vec<String> = self
            .domains
            .iter()
            .map(|domain| format!("https://{}", domain))
            .collect();

        let outcome = first_success(urls, |url| async move {
            url_returns_200(self.prober.as_ref(), &url).await
        })
        .await;

        if outcome.succeeded {
            info!(attempts = outcome.attempts, "External website probe passed");
        } else {
            warn!(attempts = outcome.attempts, "No external website was reachable");
        }
        outcome
    }
}
