//! Live feed query against the orchestration platform.
//!
//! The platform's log API is non-resumable: every call takes the full
//! currently-available window and filters client-side against the cursor
//! captured before the fetch was issued, so a window advancing mid-call
//! cannot drop records. A reported completion timestamp forces the returned
//! cursor to `None`: the one signal that live polling should stop and the
//! caller should switch toward archived retrieval.

use chrono::{DateTime, Utc};
use lumber_core::{LogRecord, LogStreamError, OrchestrationClient};

/// Queries the instance's live window and reconciles it against `since`.
pub async fn query_live(
    client: &dyn OrchestrationClient,
    instance_id: &str,
    since: Option<DateTime<Utc>>,
) -> Result<(Vec<LogRecord>, Option<DateTime<Utc>>), LogStreamError> {
    let previous = since;
    let (mut records, mut last_time) = client.fetch_logs(instance_id, None, true).await?;
    if client.completion_timestamp(instance_id).await?.is_some() {
        last_time = None;
    }
    if let Some(previous) = previous {
        records.retain(|r| r.timestamp > previous);
    }
    Ok((records, last_time))
}
