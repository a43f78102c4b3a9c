// ABOUTME: Reachability probe for candidate site URLs.
// ABOUTME: One GET with a bounded timeout; status code and body are discarded.

use std::time::Duration;

use thiserror::Error;

use crate::models::Validity;

/// Default per-request timeout. The probe makes a single attempt; a crawler
/// cannot afford an unbounded wait on a dead host.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Coarse transport outcomes for a probe request.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Performs a single GET against the candidate URL.
///
/// Only transport-level success matters: any HTTP status counts as
/// reachable, and the response body is never read.
pub async fn check_reachable(http: &reqwest::Client, url: &str) -> Result<(), ProbeError> {
    match http.get(url).send().await {
        Ok(_response) => Ok(()),
        Err(err) if err.is_timeout() => Err(ProbeError::Timeout),
        Err(err) => Err(ProbeError::Transport(err)),
    }
}

impl From<&Result<(), ProbeError>> for Validity {
    fn from(outcome: &Result<(), ProbeError>) -> Self {
        match outcome {
            Ok(()) => Validity::Valid,
            Err(_) => Validity::Invalid,
        }
    }
}
