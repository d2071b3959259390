mod client;
mod job_scheduler_client;
mod prober;

pub use client::build_http_client;
pub use job_scheduler_client::HttpJobSchedulerClient;
pub use prober::ReqwestHttpProber;

use radix_canary_domain::DomainError;
use std::time::Duration;

pub(crate) fn map_request_error(url: &str, timeout: Duration, err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::Timeout {
            target: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        DomainError::ConnectionFailed {
            target: url.to_string(),
            reason: err.to_string(),
        }
    }
}
