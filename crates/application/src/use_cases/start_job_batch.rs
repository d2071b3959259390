use crate::ports::JobSchedulerClient;
use crate::services::BearerTokenGate;
use radix_canary_domain::{BatchRequest, Outcome};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Authorizes the caller and forwards the batch request to the job scheduler.
pub struct StartJobBatchUseCase {
    gate: BearerTokenGate,
    client: Arc<dyn JobSchedulerClient>,
    batches_url: String,
    request: BatchRequest,
}

impl StartJobBatchUseCase {
    pub fn new(
        gate: BearerTokenGate,
        client: Arc<dyn JobSchedulerClient>,
        batches_url: String,
        request: BatchRequest,
    ) -> Self {
        Self {
            gate,
            client,
            batches_url,
            request,
        }
    }

    /// Returns the scheduler's response when it answers 200; any other result
    /// collapses to the generic error and is only logged.
    #[instrument(skip_all, name = "start_job_batch")]
    pub async fn execute(&self, authorization: Option<&str>) -> Outcome {
        if !self.gate.authorize(authorization) {
            error!("Received unauthorized request");
            return Outcome::unauthorized();
        }

        debug!(url = %self.batches_url, "Sending request");

        match self.client.submit_batch(&self.batches_url, &self.request).await {
            Ok(response) if response.status == 200 => {
                info!(url = %self.batches_url, bytes = response.body.len(), "Job batch started");
                Outcome::Relayed {
                    status: response.status,
                    body: response.body,
                    content_type: response.content_type,
                }
            }
            Ok(response) => {
                error!(
                    url = %self.batches_url,
                    status = response.status,
                    "Job scheduler rejected batch request"
                );
                Outcome::error()
            }
            Err(e) => {
                error!(url = %self.batches_url, error = %e, "Failed to send request");
                Outcome::error()
            }
        }
    }
}
