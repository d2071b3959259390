use radix_canary_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves names through the platform resolver (`/etc/resolv.conf`, nsswitch).
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = tokio::net::lookup_host((domain, 0));

        let socket_addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| DomainError::Timeout {
                target: format!("system resolver for {}", domain),
                timeout_ms: self.timeout.as_millis() as u64,
            })?
            .map_err(|e| DomainError::ResolutionFailed {
                domain: domain.to_string(),
                resolver: "system".to_string(),
                reason: e.to_string(),
            })?;

        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in socket_addrs {
            if !addresses.contains(&addr.ip()) {
                addresses.push(addr.ip());
            }
        }

        if addresses.is_empty() {
            return Err(DomainError::EmptyResolution {
                domain: domain.to_string(),
                resolver: "system".to_string(),
            });
        }

        debug!(domain = %domain, addresses = addresses.len(), "System resolver answered");
        Ok(addresses)
    }
}
