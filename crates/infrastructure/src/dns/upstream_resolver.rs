//! Direct resolution against an explicit DNS server.
//!
//! A query goes out over UDP first; a truncated answer is repeated over TCP.
//! A records are asked for first and AAAA only when no A record came back.

use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use super::wire::{DnsResponse, MessageBuilder, ResponseParser};
use radix_canary_domain::{DomainError, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

pub struct UpstreamResolver {
    dns_port: u16,
    timeout: Duration,
}

impl UpstreamResolver {
    pub fn new(dns_port: u16, timeout: Duration) -> Self {
        Self { dns_port, timeout }
    }

    /// The whole exchange, address families and TCP fallback included, shares one timeout.
    pub async fn resolve(&self, domain: &str, server: &str) -> Result<Vec<IpAddr>, DomainError> {
        let exchange = async {
            let server_addr = self.server_addr(server).await?;

            for record_type in [RecordType::A, RecordType::AAAA] {
                let response = self.query(server_addr, domain, &record_type).await?;

                if !response.is_success() {
                    return Err(DomainError::ResolutionFailed {
                        domain: domain.to_string(),
                        resolver: server.to_string(),
                        reason: ResponseParser::rcode_to_status(response.rcode).to_string(),
                    });
                }

                if !response.addresses.is_empty() {
                    return Ok(response.addresses);
                }

                debug!(
                    domain = %domain,
                    server = %server,
                    record_type = %record_type,
                    "No addresses in answer"
                );
            }

            Err(DomainError::EmptyResolution {
                domain: domain.to_string(),
                resolver: server.to_string(),
            })
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| DomainError::Timeout {
                target: format!("dns server {}", server),
                timeout_ms: self.timeout.as_millis() as u64,
            })?
    }

    /// Accepts `ip:port`, a bare IP (queried on the configured DNS port) or a hostname.
    async fn server_addr(&self, server: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.dns_port));
        }

        tokio::net::lookup_host((server, self.dns_port))
            .await
            .map_err(|e| DomainError::ConnectionFailed {
                target: server.to_string(),
                reason: format!("cannot resolve dns server address: {}", e),
            })?
            .next()
            .ok_or_else(|| DomainError::ConnectionFailed {
                target: server.to_string(),
                reason: "dns server name has no addresses".to_string(),
            })
    }

    async fn query(
        &self,
        server_addr: SocketAddr,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query(domain, record_type)?;

        let udp = UdpTransport::new(server_addr)
            .send(&request, self.timeout)
            .await?;
        let response = ResponseParser::parse(&udp.bytes, server_addr)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server_addr, domain = %domain, "Truncated UDP answer, retrying over TCP");

        let tcp = TcpTransport::new(server_addr)
            .send(&request, self.timeout)
            .await?;
        let response = ResponseParser::parse(&tcp.bytes, server_addr)?;

        if response.id != id {
            return Err(DomainError::MalformedResponse {
                target: server_addr.to_string(),
                reason: format!("DNS ID mismatch: expected {}, got {}", id, response.id),
            });
        }

        Ok(response)
    }
}
