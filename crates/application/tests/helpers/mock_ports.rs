#![allow(dead_code)]

use async_trait::async_trait;
use radix_canary_application::ports::{
    HttpProber, JobSchedulerClient, NameResolver, ResolverTarget,
};
use radix_canary_domain::{BatchRequest, DomainError, RelayedResponse};
use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;

const RESOLVED_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(142, 250, 74, 46));

/// Resolver that succeeds only for registered (domain, target) pairs and records every call.
#[derive(Default)]
pub struct MockNameResolver {
    resolvable: Mutex<HashSet<(String, ResolverTarget)>>,
    empty: Mutex<HashSet<(String, ResolverTarget)>>,
    calls: Mutex<Vec<(String, ResolverTarget)>>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, domain: &str, target: ResolverTarget) {
        self.resolvable
            .lock()
            .unwrap()
            .insert((domain.to_string(), target));
    }

    /// Lookup succeeds but returns no addresses.
    pub fn resolve_empty(&self, domain: &str, target: ResolverTarget) {
        self.empty
            .lock()
            .unwrap()
            .insert((domain.to_string(), target));
    }

    pub fn calls(&self) -> Vec<(String, ResolverTarget)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn lookup(
        &self,
        domain: &str,
        target: &ResolverTarget,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let key = (domain.to_string(), target.clone());
        self.calls.lock().unwrap().push(key.clone());

        if self.resolvable.lock().unwrap().contains(&key) {
            return Ok(vec![RESOLVED_IP]);
        }
        if self.empty.lock().unwrap().contains(&key) {
            return Ok(vec![]);
        }
        Err(DomainError::ResolutionFailed {
            domain: domain.to_string(),
            resolver: target.to_string(),
            reason: "no such host".to_string(),
        })
    }
}

/// Prober answering with registered statuses; unknown URLs fail to connect.
#[derive(Default)]
pub struct MockHttpProber {
    statuses: Mutex<HashMap<String, u16>>,
    calls: Mutex<Vec<String>>,
}

impl MockHttpProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16) {
        self.statuses
            .lock()
            .unwrap()
            .insert(url.to_string(), status);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpProber for MockHttpProber {
    async fn get_status(&self, url: &str) -> Result<u16, DomainError> {
        self.calls.lock().unwrap().push(url.to_string());

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

pub struct MockJobSchedulerClient {
    response: Result<RelayedResponse, DomainError>,
    requests: Mutex<Vec<(String, BatchRequest)>>,
}

impl MockJobSchedulerClient {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Ok(RelayedResponse {
                status,
                body: body.as_bytes().to_vec(),
                content_type: Some("application/json".to_string()),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: Err(DomainError::ConnectionFailed {
                target: "myjob".to_string(),
                reason: "connection refused".to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, BatchRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSchedulerClient for MockJobSchedulerClient {
    async fn submit_batch(
        &self,
        url: &str,
        request: &BatchRequest,
    ) -> Result<RelayedResponse, DomainError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), request.clone()));
        self.response.clone()
    }
}
