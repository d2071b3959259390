use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::get_metrics))
        .route("/error", get(handlers::error))
        .route("/echo", get(handlers::echo))
        .route("/testinternaldns", get(handlers::test_internal_dns))
        .route("/testpublicdns", get(handlers::test_public_dns))
        .route("/testjobscheduler", get(handlers::test_job_scheduler))
        .route("/testexternalwebsite", get(handlers::test_external_website))
        .route("/testradixsite", get(handlers::test_radix_site))
        .route("/startjobbatch", post(handlers::start_job_batch))
        .with_state(state)
}
