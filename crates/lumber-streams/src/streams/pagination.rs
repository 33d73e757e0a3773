//! Caller-facing pagination contract for log pages.
//!
//! Request and response are plain serializable types so hosting services can
//! put any transport in front of the engine. `to_params` builds the sparse
//! query-parameter map HTTP callers send: only present fields are emitted.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lumber_core::{ChunkId, InstanceId, LogRecord, RunId};

use crate::streams::archived::ArchivedBatch;

/// One incremental log request: the run, and the caller's cursors from the
/// previous page (`last_file` for archived mode, `last_time` for temp/live).
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct LogPageRequest {
    pub run_id: RunId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file: Option<ChunkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_time: Option<DateTime<Utc>>,
}

impl LogPageRequest {
    pub fn new(run_id: impl Into<RunId>) -> Self {
        Self {
            run_id: run_id.into(),
            instance_id: None,
            last_file: None,
            last_time: None,
        }
    }

    pub fn with_last_file(mut self, last_file: impl Into<ChunkId>) -> Self {
        self.last_file = Some(last_file.into());
        self
    }

    pub fn with_last_time(mut self, last_time: DateTime<Utc>) -> Self {
        self.last_time = Some(last_time);
        self
    }

    /// Sparse query parameters: only the cursors that are present.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(last_file) = &self.last_file {
            params.insert("last_file".to_string(), last_file.clone());
        }
        if let Some(last_time) = &self.last_time {
            params.insert(
                "last_time".to_string(),
                last_time.to_rfc3339_opts(SecondsFormat::Micros, true),
            );
        }
        params
    }
}

/// One page of logs with the cursors to thread into the next request and the
/// full chunk manifest known at call time (empty for temp/live pages).
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct LogPageResponse {
    pub logs: Vec<LogRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file: Option<ChunkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_time: Option<DateTime<Utc>>,
    pub files: Vec<ChunkId>,
}

impl LogPageResponse {
    /// Page built from an archived batch.
    pub fn archived(batch: ArchivedBatch) -> Self {
        Self {
            logs: batch.records,
            last_file: batch.last_file,
            last_time: None,
            files: batch.files,
        }
    }

    /// Page built from a timestamp-paged source (temp merge or live query).
    pub fn timed(logs: Vec<LogRecord>, last_time: Option<DateTime<Utc>>) -> Self {
        Self {
            logs,
            last_file: None,
            last_time,
            files: Vec::new(),
        }
    }
}
