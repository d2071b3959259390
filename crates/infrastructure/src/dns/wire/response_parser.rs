use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use radix_canary_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub addresses: Vec<IpAddr>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// `server` only labels the error when the bytes are not a DNS message.
    pub fn parse(response_bytes: &[u8], server: SocketAddr) -> Result<DnsResponse, DomainError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| DomainError::MalformedResponse {
                target: server.to_string(),
                reason: format!("failed to parse DNS response: {}", e),
            })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let addresses: Vec<IpAddr> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            addresses,
            rcode,
            truncated,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
