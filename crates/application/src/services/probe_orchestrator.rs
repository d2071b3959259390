use radix_canary_domain::ProbeOutcome;
use std::future::Future;

/// Tries `candidates` in order and stops at the first one for which `attempt` returns true.
///
/// Attempts run one after another so declared order decides which candidate
/// settles the probe. The probe fails only once every candidate has failed; an
/// empty candidate list fails without any attempt.
pub async fn first_success<I, F, Fut>(candidates: I, mut attempt: F) -> ProbeOutcome
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut attempts = 0;

    for candidate in candidates {
        attempts += 1;
        if attempt(candidate).await {
            return ProbeOutcome::passed(attempts);
        }
    }

    ProbeOutcome::failed(attempts)
}
