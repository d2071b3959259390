//! Turns an [`Outcome`] into the HTTP response and keeps the counters in step.
//!
//! Every outcome counts as a request. Error and unauthorized outcomes also
//! count as errors; health and relayed responses do not.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use radix_canary_application::ports::MetricsCollector;
use radix_canary_domain::{ErrorResponse, HealthStatus, Outcome};
use std::fmt::Display;
use tracing::{debug, error};

pub fn report(metrics: &dyn MetricsCollector, outcome: Outcome) -> Response {
    metrics.increment_requests();

    match outcome {
        Outcome::Health => match serde_json::to_vec(&HealthStatus::default()) {
            Ok(body) => json_bytes(StatusCode::OK, body),
            Err(e) => encoding_failure(metrics, e),
        },
        Outcome::Error { message } => {
            metrics.increment_errors();
            error!(error = %message, "Server error");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(message))).into_response()
        }
        Outcome::Unauthorized { message } => {
            metrics.increment_errors();
            error!(error = %message, "Server error");
            (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(message))).into_response()
        }
        Outcome::Relayed {
            status,
            body,
            content_type,
        } => relayed(status, body, content_type),
    }
}

/// Serialization failed after the request was counted: answer 500 with the
/// encoder's message and count the error.
pub fn encoding_failure(metrics: &dyn MetricsCollector, err: impl Display) -> Response {
    metrics.increment_errors();
    error!(error = %err, "Unable to encode JSON");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
        .into_response()
}

pub(crate) fn json_bytes(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

fn relayed(status: u16, body: Vec<u8>, content_type: Option<String>) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    debug!(status = status.as_u16(), bytes = body.len(), "Relaying response");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    if let Some(value) = content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_canary_domain::MetricsSnapshot;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Default)]
    struct Counters {
        requests: AtomicU64,
        errors: AtomicU64,
    }

    impl MetricsCollector for Counters {
        fn increment_requests(&self) {
            self.requests.fetch_add(1, Ordering::Relaxed);
        }

        fn increment_errors(&self) {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }

        fn snapshot(&self) -> MetricsSnapshot {
            MetricsSnapshot {
                requests_total: self.requests.load(Ordering::Relaxed),
                errors_total: self.errors.load(Ordering::Relaxed),
            }
        }
    }

    #[test]
    fn test_health_counts_request_only() {
        let counters = Counters::default();
        let response = report(&counters, Outcome::Health);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(counters.snapshot().requests_total, 1);
        assert_eq!(counters.snapshot().errors_total, 0);
    }

    #[test]
    fn test_error_and_unauthorized_count_errors() {
        let counters = Counters::default();

        assert_eq!(
            report(&counters, Outcome::error()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            report(&counters, Outcome::unauthorized()).status(),
            StatusCode::UNAUTHORIZED
        );

        assert_eq!(
            counters.snapshot(),
            MetricsSnapshot {
                requests_total: 2,
                errors_total: 2
            }
        );
    }

    #[test]
    fn test_relayed_keeps_status_and_content_type() {
        let counters = Counters::default();
        let response = report(
            &counters,
            Outcome::Relayed {
                status: 200,
                body: b"{\"ok\":true}".to_vec(),
                content_type: Some("application/json".to_string()),
            },
        );

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(counters.snapshot().errors_total, 0);
    }

    #[test]
    fn test_encoding_failure_reports_message() {
        let counters = Counters::default();
        counters.increment_requests();

        let response = encoding_failure(&counters, "boom");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            counters.snapshot(),
            MetricsSnapshot {
                requests_total: 1,
                errors_total: 1
            }
        );
    }
}
