//! Temp buffer merge: per-writer files that are still being appended to.
//!
//! Every file under the run's temp prefix is read and parsed independently,
//! the union is filtered to strictly `timestamp > since`, then stable-sorted
//! by timestamp so ties keep their read order (there is no secondary key).
//! No caching: the buffers are mutable.

use chrono::{DateTime, Utc};
use lumber_core::{parse_content, LogLayout, LogRecord, LogStreamError, StorageBackend};

/// Merges the run's temp buffers into one time-filtered, sorted batch.
///
/// Returns the records newer than `since` and the new cursor: the timestamp
/// of the last record in sorted order, or `since` unchanged when nothing new
/// was found. The strict inequality keeps the boundary record from being
/// re-emitted on the next poll.
pub async fn merge_temp(
    storage: &dyn StorageBackend,
    layout: &LogLayout,
    run_id: &str,
    since: Option<DateTime<Utc>>,
) -> Result<(Vec<LogRecord>, Option<DateTime<Utc>>), LogStreamError> {
    let mut names = storage.list(&layout.temp_prefix(run_id)).await?;
    names.sort();

    let mut records = Vec::new();
    for name in names {
        let path = layout.temp_path(run_id, &name);
        // A writer may rotate its buffer away between list and read.
        if !storage.exists(&path).await? {
            continue;
        }
        let bytes = storage.read(&path).await?;
        records.extend(parse_content(&String::from_utf8_lossy(&bytes)).records);
    }

    if let Some(since) = since {
        records.retain(|r| r.timestamp > since);
    }
    records.sort_by_key(|r| r.timestamp);
    let last_time = records.last().map(|r| r.timestamp).or(since);
    Ok((records, last_time))
}
