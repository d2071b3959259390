use serde::{Deserialize, Serialize};

/// Job batch payload forwarded to the job scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub job_schedule_descriptions: Vec<JobScheduleDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobScheduleDescription {
    pub time_limit_seconds: u64,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            job_schedule_descriptions: vec![JobScheduleDescription {
                time_limit_seconds: 1,
            }],
        }
    }
}

/// Status and body returned by the job scheduler, relayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}
