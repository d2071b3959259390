use radix_canary_domain::DomainError;
use std::time::Duration;

const USER_AGENT: &str = concat!("radix-canary/", env!("CARGO_PKG_VERSION"));

/// One client is shared by every outbound probe so connections are pooled.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}
