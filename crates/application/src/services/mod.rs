mod bearer_gate;
mod probe_orchestrator;

pub use bearer_gate::{BearerTokenGate, BEARER_PREFIX};
pub use probe_orchestrator::first_success;
