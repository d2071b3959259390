mod external_website;
mod internal_dns;
mod job_scheduler;
mod public_dns;
mod radix_site;

pub use external_website::TestExternalWebsiteUseCase;
pub use internal_dns::TestInternalDnsUseCase;
pub use job_scheduler::TestJobSchedulerUseCase;
pub use public_dns::TestPublicDnsUseCase;
pub use radix_site::TestRadixSiteUseCase;

use crate::ports::HttpProber;
use tracing::{debug, warn};

/// A target is reachable only when it answers GET with exactly HTTP 200.
pub(crate) async fn url_returns_200(prober: &dyn HttpProber, url: &str) -> bool {
    debug!(url = %url, "Sending request");

    match prober.get_status(url).await {
        Ok(200) => true,
        Ok(status) => {
            warn!(url = %url, status, "Unexpected response status");
            false
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Failed to send request");
            false
        }
    }
}
