pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use radix_canary_domain::DomainError;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

fn timeout_error(target: impl ToString, timeout: Duration) -> DomainError {
    DomainError::Timeout {
        target: target.to_string(),
        timeout_ms: timeout.as_millis() as u64,
    }
}

fn connection_error(target: impl ToString, reason: impl ToString) -> DomainError {
    DomainError::ConnectionFailed {
        target: target.to_string(),
        reason: reason.to_string(),
    }
}
