#![allow(dead_code)]
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Bodies received on `POST /api/v1/batches`.
pub type ReceivedBodies = Arc<Mutex<Vec<Vec<u8>>>>;

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

pub fn status_router() -> Router {
    Router::new()
        .route("/ok", get(|| async { "fine" }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/created", get(|| async { StatusCode::CREATED }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        )
}

pub fn scheduler_router(status: StatusCode, body: &'static str) -> (Router, ReceivedBodies) {
    let received: ReceivedBodies = Arc::default();
    let sink = Arc::clone(&received);

    let router = Router::new().route(
        "/api/v1/batches",
        post(move |payload: Bytes| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(payload.to_vec());
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    (router, received)
}

pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
