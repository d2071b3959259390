#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use radix_canary_api::dto::MetricLabels;
use radix_canary_api::{create_api_routes, AppState, ProbeUseCases};
use radix_canary_application::ports::{
    HttpProber, JobSchedulerClient, MetricsCollector, NameResolver, ResolverTarget,
};
use radix_canary_application::services::BearerTokenGate;
use radix_canary_application::use_cases::{
    StartJobBatchUseCase, TestExternalWebsiteUseCase, TestInternalDnsUseCase,
    TestJobSchedulerUseCase, TestPublicDnsUseCase, TestRadixSiteUseCase,
};
use radix_canary_domain::config::SiteConfig;
use radix_canary_domain::{BatchRequest, DomainError, MetricsSnapshot, RelayedResponse};
use radix_canary_infrastructure::metrics::AtomicMetricsCollector;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const SECRET: &str = "s3cret";
pub const JOBS_URL: &str = "http://myjob:8080/api/v1/jobs";
pub const BATCHES_URL: &str = "http://myjob:8080/api/v1/batches";

pub struct SwitchResolver {
    pub healthy: AtomicBool,
}

#[async_trait]
impl NameResolver for SwitchResolver {
    async fn lookup(
        &self,
        domain: &str,
        target: &ResolverTarget,
    ) -> Result<Vec<IpAddr>, DomainError> {
        if self.healthy.load(Ordering::Relaxed) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))])
        } else {
            Err(DomainError::ResolutionFailed {
                domain: domain.to_string(),
                resolver: target.to_string(),
                reason: "no such host".to_string(),
            })
        }
    }
}

#[derive(Default)]
pub struct StatusProber {
    statuses: Mutex<HashMap<String, u16>>,
}

impl StatusProber {
    pub fn respond(&self, url: &str, status: u16) {
        self.statuses
            .lock()
            .unwrap()
            .insert(url.to_string(), status);
    }
}

#[async_trait]
impl HttpProber for StatusProber {
    async fn get_status(&self, url: &str) -> Result<u16, DomainError> {
        self.statuses
            .lock()
            .unwrap()
            .get(url)
            .copied()
            .ok_or_else(|| DomainError::ConnectionFailed {
                target: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

#[derive(Default)]
pub struct FakeScheduler {
    response: Mutex<Option<RelayedResponse>>,
    pub calls: AtomicUsize,
}

impl FakeScheduler {
    pub fn answer(&self, status: u16, body: &str) {
        *self.response.lock().unwrap() = Some(RelayedResponse {
            status,
            body: body.as_bytes().to_vec(),
            content_type: Some("application/json".to_string()),
        });
    }
}

#[async_trait]
impl JobSchedulerClient for FakeScheduler {
    async fn submit_batch(
        &self,
        url: &str,
        _request: &BatchRequest,
    ) -> Result<RelayedResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::ConnectionFailed {
                target: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

pub struct TestApp {
    pub router: Router,
    pub resolver: Arc<SwitchResolver>,
    pub prober: Arc<StatusProber>,
    pub scheduler: Arc<FakeScheduler>,
    pub metrics: Arc<AtomicMetricsCollector>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_secret(Some(SECRET.to_string()))
    }

    pub fn with_secret(secret: Option<String>) -> Self {
        let resolver = Arc::new(SwitchResolver {
            healthy: AtomicBool::new(true),
        });
        let prober = Arc::new(StatusProber::default());
        let scheduler = Arc::new(FakeScheduler::default());
        let metrics = Arc::new(AtomicMetricsCollector::new());

        let domains = vec!["google.com".to_string(), "slack.com".to_string()];
        let site = SiteConfig {
            cluster_name: Some("weekly-42".to_string()),
            dns_zone: Some("dev.radix.equinor.com".to_string()),
            ..SiteConfig::default()
        };

        let probes = ProbeUseCases {
            internal_dns: Arc::new(TestInternalDnsUseCase::new(
                resolver.clone(),
                domains.clone(),
            )),
            public_dns: Arc::new(TestPublicDnsUseCase::new(
                resolver.clone(),
                domains.clone(),
                vec!["1.1.1.1".to_string()],
            )),
            job_scheduler: Arc::new(TestJobSchedulerUseCase::new(
                prober.clone(),
                JOBS_URL.to_string(),
            )),
            external_website: Arc::new(TestExternalWebsiteUseCase::new(
                prober.clone(),
                domains,
            )),
            radix_site: Arc::new(TestRadixSiteUseCase::new(prober.clone(), site)),
        };

        let start_job_batch = Arc::new(StartJobBatchUseCase::new(
            BearerTokenGate::new(secret),
            scheduler.clone(),
            BATCHES_URL.to_string(),
            BatchRequest::default(),
        ));

        let state = AppState {
            probes,
            start_job_batch,
            metrics: metrics.clone(),
            metric_labels: Arc::new(MetricLabels::new(
                "radix-canary",
                "test-host".to_string(),
                4242,
                "9.9.9",
            )),
        };

        Self {
            router: create_api_routes(state),
            resolver,
            prober,
            scheduler,
            metrics,
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}
