use crate::dto::EchoResponse;
use crate::reporter::{encoding_failure, json_bytes, report};
use crate::state::AppState;
use crate::VERSION;
use axum::{
    body::to_bytes,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use radix_canary_domain::Outcome;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use tracing::{debug, info, instrument};

/// Echo bodies beyond this size are rejected as unreadable.
const MAX_ECHO_BODY_BYTES: usize = 64 * 1024;

#[instrument(skip(state), name = "api_index")]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    state.metrics.increment_requests();
    Html(format!("<h1>Radix Canary App v {}</h1>", VERSION))
}

#[instrument(skip(state), name = "api_health")]
pub async fn health_check(State(state): State<AppState>) -> Response {
    debug!("Health check requested");
    report(state.metrics.as_ref(), Outcome::Health)
}

#[instrument(skip(state), name = "api_get_metrics")]
pub async fn get_metrics(State(state): State<AppState>) -> Response {
    state.metrics.increment_requests();

    let body = state.metric_labels.exposition(&state.metrics.snapshot());
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
        .into_response()
}

#[instrument(skip(state), name = "api_error")]
pub async fn error(State(state): State<AppState>) -> Response {
    report(state.metrics.as_ref(), Outcome::error())
}

#[instrument(skip_all, name = "api_echo")]
pub async fn echo(State(state): State<AppState>, request: Request) -> Response {
    state.metrics.increment_requests();

    let (parts, body) = request.into_parts();

    let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in &parts.headers {
        headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    let remoteaddr = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let body = match to_bytes(body, MAX_ECHO_BODY_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => return encoding_failure(state.metrics.as_ref(), e),
    };

    let echo = EchoResponse {
        headers,
        method: parts.method.to_string(),
        url: parts.uri.to_string(),
        requesturi: parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string()),
        remoteaddr,
        body,
    };

    info!(method = %echo.method, uri = %echo.requesturi, remote = %echo.remoteaddr, "Echo request");

    match serde_json::to_vec(&echo) {
        Ok(bytes) => json_bytes(StatusCode::OK, bytes),
        Err(e) => encoding_failure(state.metrics.as_ref(), e),
    }
}
