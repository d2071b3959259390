use serde::{Deserialize, Serialize};

/// Status value carried by a healthy response.
pub const HEALTH_STATUS_OK: u16 = 200;

/// Message returned for every failed probe or relay.
pub const ERROR_MESSAGE: &str = "can't fulfil request";

/// Message returned when the bearer credential is rejected.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(rename = "Status")]
    pub status: u16,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: HEALTH_STATUS_OK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Result of running one probe across its candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub succeeded: bool,
    /// Number of candidates tried before the probe settled.
    pub attempts: usize,
}

impl ProbeOutcome {
    pub fn passed(attempts: usize) -> Self {
        Self {
            succeeded: true,
            attempts,
        }
    }

    pub fn failed(attempts: usize) -> Self {
        Self {
            succeeded: false,
            attempts,
        }
    }
}

/// Terminal outcome of a request, rendered by the response reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Health,
    Error {
        message: String,
    },
    Unauthorized {
        message: String,
    },
    /// Remote response passed through to the caller unmodified.
    Relayed {
        status: u16,
        body: Vec<u8>,
        content_type: Option<String>,
    },
}

impl Outcome {
    pub fn error() -> Self {
        Self::Error {
            message: ERROR_MESSAGE.to_string(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            message: UNAUTHORIZED_MESSAGE.to_string(),
        }
    }

    /// Health and relayed responses are the only outcomes that do not count as errors.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Unauthorized { .. })
    }
}

impl From<ProbeOutcome> for Outcome {
    fn from(outcome: ProbeOutcome) -> Self {
        if outcome.succeeded {
            Self::Health
        } else {
            Self::error()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub errors_total: u64,
}
