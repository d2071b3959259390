pub mod probes;
pub mod start_job_batch;

// Re-export use cases
pub use probes::{
    TestExternalWebsiteUseCase, TestInternalDnsUseCase, TestJobSchedulerUseCase,
    TestPublicDnsUseCase, TestRadixSiteUseCase,
};
pub use start_job_batch::StartJobBatchUseCase;
