use super::map_request_error;
use async_trait::async_trait;
use radix_canary_application::ports::HttpProber;
use radix_canary_domain::DomainError;
use std::time::Duration;
use tracing::debug;

pub struct ReqwestHttpProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestHttpProber {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl HttpProber for ReqwestHttpProber {
    async fn get_status(&self, url: &str) -> Result<u16, DomainError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_request_error(url, self.timeout, e))?;

        let status = response.status().as_u16();
        debug!(url = %url, status, "Probe response received");
        Ok(status)
    }
}
