use super::url_returns_200;
use crate::ports::HttpProber;
use radix_canary_domain::config::SiteConfig;
use radix_canary_domain::ProbeOutcome;
use std::sync::Arc;
use tracing::{error, instrument};

/// Probes the canary's own production deployment through its public hostname.
pub struct TestRadixSiteUseCase {
    prober: Arc<dyn HttpProber>,
    site: SiteConfig,
}

impl TestRadixSiteUseCase {
    pub fn new(prober: Arc<dyn HttpProber>, site: SiteConfig) -> Self {
        Self { prober, site }
    }

    #[instrument(skip(self), name = "probe_radix_site")]
    pub async fn execute(&self) -> ProbeOutcome {
        // Missing identifiers leave a malformed URL; the request is still attempted.
        for setting in self.site.missing_settings() {
            error!(setting, "Could not find {}", setting);
        }

        if url_returns_200(self.prober.as_ref(), &self.site.canary_url()).await {
            ProbeOutcome::passed(1)
        } else {
            ProbeOutcome::failed(1)
        }
    }
}
