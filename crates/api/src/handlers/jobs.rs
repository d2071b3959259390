use crate::reporter::report;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Response,
};
use tracing::instrument;

#[instrument(skip_all, name = "api_start_job_batch")]
pub async fn start_job_batch(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let outcome = state.start_job_batch.execute(authorization).await;
    report(state.metrics.as_ref(), outcome)
}
