pub mod dto;
pub mod handlers;
pub mod reporter;
pub mod routes;
pub mod state;

pub use routes::create_api_routes;
pub use state::{AppState, ProbeUseCases};

/// Version reported by the index page and the metric labels.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
