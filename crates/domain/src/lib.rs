//! Radix Canary Domain Layer
pub mod batch;
pub mod config;
pub mod errors;
pub mod outcome;
pub mod record_type;

pub use batch::{BatchRequest, JobScheduleDescription, RelayedResponse};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use outcome::{
    ErrorResponse, HealthStatus, MetricsSnapshot, Outcome, ProbeOutcome, ERROR_MESSAGE,
    HEALTH_STATUS_OK, UNAUTHORIZED_MESSAGE,
};
pub use record_type::RecordType;
