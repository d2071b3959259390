use super::system_resolver::SystemResolver;
use super::upstream_resolver::UpstreamResolver;
use async_trait::async_trait;
use radix_canary_application::ports::{NameResolver, ResolverTarget};
use radix_canary_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;

/// `NameResolver` backed by the platform resolver and direct DNS queries.
pub struct NetworkNameResolver {
    system: SystemResolver,
    upstream: UpstreamResolver,
}

impl NetworkNameResolver {
    pub fn new(dns_port: u16, timeout: Duration) -> Self {
        Self {
            system: SystemResolver::new(timeout),
            upstream: UpstreamResolver::new(dns_port, timeout),
        }
    }
}

#[async_trait]
impl NameResolver for NetworkNameResolver {
    async fn lookup(
        &self,
        domain: &str,
        target: &ResolverTarget,
    ) -> Result<Vec<IpAddr>, DomainError> {
        match target {
            ResolverTarget::System => self.system.resolve(domain).await,
            ResolverTarget::Server(server) => self.upstream.resolve(domain, server).await,
        }
    }
}
