pub mod auth;
pub mod errors;
pub mod job_scheduler;
pub mod logging;
pub mod probe;
pub mod root;
pub mod server;
pub mod site;

pub use auth::AuthConfig;
pub use errors::ConfigError;
pub use job_scheduler::JobSchedulerConfig;
pub use logging::LoggingConfig;
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use site::SiteConfig;
