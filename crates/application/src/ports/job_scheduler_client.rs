use async_trait::async_trait;
use radix_canary_domain::{BatchRequest, DomainError, RelayedResponse};

#[async_trait]
pub trait JobSchedulerClient: Send + Sync {
    /// Posts a batch request and returns the scheduler's response whatever its status.
    async fn submit_batch(
        &self,
        url: &str,
        request: &BatchRequest,
    ) -> Result<RelayedResponse, DomainError>;
}
