use crate::ports::{NameResolver, ResolverTarget};
use crate::services::first_success;
use radix_canary_domain::ProbeOutcome;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Passes when any public DNS server resolves any domain.
///
/// Pairs are tried domain-major: every server is asked for the first domain
/// before the second domain is tried.
pub struct TestPublicDnsUseCase {
    resolver: Arc<dyn NameResolver>,
    domains: Vec<String>,
    dns_servers: Vec<String>,
}

impl TestPublicDnsUseCase {
    pub fn new(
        resolver: Arc<dyn NameResolver>,
        domains: Vec<String>,
        dns_servers: Vec<String>,
    ) -> Self {
        Self {
            resolver,
            domains,
            dns_servers,
        }
    }

    #[instrument(skip(self), name = "probe_public_dns")]
    pub async fn execute(&self) -> ProbeOutcome {
        let pairs: Vec<(&str, &str)> = self
            .domains
            .iter()
            .flat_map(|domain| {
                self.dns_servers
                    .iter()
                    .map(move |server| (domain.as_str(), server.as_str()))
            })
            .collect();

        let outcome = first_success(pairs, |(domain, server)| self.resolves(domain, server)).await;

        if outcome.succeeded {
            info!(attempts = outcome.attempts, "Public DNS probe passed");
        } else {
            warn!(
                attempts = outcome.attempts,
                "Public DNS probe failed for every domain and server"
            );
        }
        outcome
    }

    async fn resolves(&self, domain: &str, server: &str) -> bool {
        let target = ResolverTarget::Server(server.to_string());
        debug!(domain = %domain, server = %server, "Resolving IP for domain with dns server");

        match self.resolver.lookup(domain, &target).await {
            Ok(addresses) if !addresses.is_empty() => {
                debug!(
                    domain = %domain,
                    server = %server,
                    addresses = addresses.len(),
                    "Successfully resolved IP for domain with dns server"
                );
                true
            }
            Ok(_) => {
                warn!(domain = %domain, server = %server, "Resolution returned no addresses");
                false
            }
            Err(e) => {
                warn!(
                    domain = %domain,
                    server = %server,
                    error = %e,
                    "Failed to resolve IP for domain with dns server"
                );
                false
            }
        }
    }
}
