use async_trait::async_trait;
use radix_canary_domain::DomainError;
use std::fmt;
use std::net::IpAddr;

/// Which resolver a lookup is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolverTarget {
    /// The platform's configured resolver.
    System,
    /// A specific DNS server address, queried on the configured DNS port.
    Server(String),
}

impl fmt::Display for ResolverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("default dns server"),
            Self::Server(addr) => write!(f, "dns server {}", addr),
        }
    }
}

#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolves `domain` to at least one address, or fails.
    async fn lookup(&self, domain: &str, target: &ResolverTarget)
        -> Result<Vec<IpAddr>, DomainError>;
}
