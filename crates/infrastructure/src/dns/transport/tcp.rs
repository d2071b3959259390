//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Each message is framed with a two-byte big-endian length prefix. Used as
//! the fallback when a UDP answer comes back truncated.

use super::{connection_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use radix_canary_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server_addr = self.server_addr;

        let exchange = async {
            let mut stream = TcpStream::connect(server_addr)
                .await
                .map_err(|e| connection_error(server_addr, e))?;
            send_with_length_prefix(&mut stream, message_bytes).await?;
            read_with_length_prefix(&mut stream).await
        };

        let response_bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| timeout_error(server_addr, timeout))??;

        debug!(
            server = %server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse { bytes: response_bytes })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::Serialization(format!(
            "DNS message too large for TCP: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| connection_error("tcp stream", format!("failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| connection_error("tcp stream", format!("failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| connection_error("tcp stream", format!("failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        connection_error("tcp stream", format!("failed to read response length: {}", e))
    })?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await.map_err(|e| {
        connection_error("tcp stream", format!("failed to read response body: {}", e))
    })?;

    Ok(response)
}
