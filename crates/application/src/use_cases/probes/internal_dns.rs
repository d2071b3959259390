use crate::ports::{NameResolver, ResolverTarget};
use crate::services::first_success;
use radix_canary_domain::ProbeOutcome;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Passes when the system resolver resolves any of the configured domains.
pub struct TestInternalDnsUseCase {
    resolver: Arc<dyn NameResolver>,
    domains: Vec<String>,
}

impl TestInternalDnsUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>, domains: Vec<String>) -> Self {
        Self { resolver, domains }
    }

    #[instrument(skip(self), name = "probe_internal_dns")]
    pub async fn execute(&self) -> ProbeOutcome {
        let target = ResolverTarget::System;

        let outcome = first_success(&self.domains, |domain| self.resolves(domain, &target)).await;

        if outcome.succeeded {
            info!(attempts = outcome.attempts, "Internal DNS probe passed");
        } else {
            warn!(attempts = outcome.attempts, "Internal DNS probe failed for every domain");
        }
        outcome
    }

    async fn resolves(&self, domain: &str, target: &ResolverTarget) -> bool {
        debug!(domain = %domain, resolver = %target, "Resolving IP for domain");

        match self.resolver.lookup(domain, target).await {
            Ok(addresses) if !addresses.is_empty() => {
                debug!(domain = %domain, resolver = %target, "Successfully resolved IP for domain");
                true
            }
            Ok(_) => {
                warn!(domain = %domain, resolver = %target, "Resolution returned no addresses");
                false
            }
            Err(e) => {
                warn!(domain = %domain, resolver = %target, error = %e, "Failed to resolve IP for domain");
                false
            }
        }
    }
}
