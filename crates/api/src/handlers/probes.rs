use crate::reporter::report;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use tracing::instrument;

#[instrument(skip(state), name = "api_test_internal_dns")]
pub async fn test_internal_dns(State(state): State<AppState>) -> Response {
    let outcome = state.probes.internal_dns.execute().await;
    report(state.metrics.as_ref(), outcome.into())
}

#[instrument(skip(state), name = "api_test_public_dns")]
pub async fn test_public_dns(State(state): State<AppState>) -> Response {
    let outcome = state.probes.public_dns.execute().await;
    report(state.metrics.as_ref(), outcome.into())
}

#[instrument(skip(state), name = "api_test_job_scheduler")]
pub async fn test_job_scheduler(State(state): State<AppState>) -> Response {
    let outcome = state.probes.job_scheduler.execute().await;
    report(state.metrics.as_ref(), outcome.into())
}

#[instrument(skip(state), name = "api_test_external_website")]
pub async fn test_external_website(State(state): State<AppState>) -> Response {
    let outcome = state.probes.external_website.execute().await;
    report(state.metrics.as_ref(), outcome.into())
}

#[instrument(skip(state), name = "api_test_radix_site")]
pub async fn test_radix_site(State(state): State<AppState>) -> Response {
    let outcome = state.probes.radix_site.execute().await;
    report(state.metrics.as_ref(), outcome.into())
}
