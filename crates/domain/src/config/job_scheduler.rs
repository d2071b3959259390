use serde::{Deserialize, Serialize};

use crate::batch::BatchRequest;

pub const JOBS_PATH: &str = "/api/v1/jobs";
pub const BATCHES_PATH: &str = "/api/v1/batches";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobSchedulerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default = "default_jobs_path")]
    pub jobs_path: String,

    #[serde(default = "default_batches_path")]
    pub batches_path: String,

    #[serde(default)]
    pub batch: BatchRequest,
}

impl JobSchedulerConfig {
    pub fn jobs_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.jobs_path)
    }

    pub fn batches_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.batches_path)
    }
}

impl Default for JobSchedulerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 0,
            jobs_path: default_jobs_path(),
            batches_path: default_batches_path(),
            batch: BatchRequest::default(),
        }
    }
}

fn default_host() -> String {
    "myjob".to_string()
}

fn default_jobs_path() -> String {
    JOBS_PATH.to_string()
}

fn default_batches_path() -> String {
    BATCHES_PATH.to_string()
}
