pub mod diagnostics;
pub mod jobs;
pub mod probes;

pub use diagnostics::{echo, error, get_metrics, health_check, index};
pub use jobs::start_job_batch;
pub use probes::{
    test_external_website, test_internal_dns, test_job_scheduler, test_public_dns,
    test_radix_site,
};
