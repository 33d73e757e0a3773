//! Error taxonomy for log retrieval.
//!
//! Only unreachable dependencies surface as errors. A run with no log prefix
//! yet is an empty result; a cursor pointing at a rotated-away chunk follows
//! the advancer's caught-up policy; a malformed line is skipped and counted by
//! the parser. Failed batches return zero records, so retrying with the same
//! cursor can never skip data.

use thiserror::Error;

/// Retrieval error: the storage or orchestration dependency is unreachable.
#[derive(Debug, Error)]
pub enum LogStreamError {
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("orchestration unavailable: {0}")]
    OrchestrationUnavailable(String),
}

impl LogStreamError {
    /// Whether the poller may reissue the failed call with the same cursor.
    /// Retry/backoff policy belongs to the poller, not the engine.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LogStreamError::BackendUnavailable(_) | LogStreamError::OrchestrationUnavailable(_)
        )
    }
}
