use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resolution of {domain} via {resolver} failed: {reason}")]
    ResolutionFailed {
        domain: String,
        resolver: String,
        reason: String,
    },

    #[error("Resolution of {domain} via {resolver} returned no addresses")]
    EmptyResolution { domain: String, resolver: String },

    #[error("Timeout after {timeout_ms}ms contacting {target}")]
    Timeout { target: String, timeout_ms: u64 },

    #[error("Connection to {target} failed: {reason}")]
    ConnectionFailed { target: String, reason: String },

    #[error("Malformed response from {target}: {reason}")]
    MalformedResponse { target: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
