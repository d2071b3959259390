use super::map_request_error;
use async_trait::async_trait;
use radix_canary_application::ports::JobSchedulerClient;
use radix_canary_domain::{BatchRequest, DomainError, RelayedResponse};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

pub struct HttpJobSchedulerClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpJobSchedulerClient {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl JobSchedulerClient for HttpJobSchedulerClient {
    async fn submit_batch(
        &self,
        url: &str,
        request: &BatchRequest,
    ) -> Result<RelayedResponse, DomainError> {
        let payload = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_request_error(url, self.timeout, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| map_request_error(url, self.timeout, e))?
            .to_vec();

        debug!(url = %url, status, bytes = body.len(), "Job scheduler responded");

        Ok(RelayedResponse {
            status,
            body,
            content_type,
        })
    }
}
