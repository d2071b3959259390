use async_trait::async_trait;
use radix_canary_domain::DomainError;

#[async_trait]
pub trait HttpProber: Send + Sync {
    /// Sends a GET to `url` and returns the response status; the body is discarded.
    async fn get_status(&self, url: &str) -> Result<u16, DomainError>;
}
