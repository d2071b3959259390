//! Radix Canary Infrastructure Layer
pub mod dns;
pub mod http;
pub mod metrics;
