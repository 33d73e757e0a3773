//! Orchestration platform seam: live log feed and completion signal.
//!
//! The platform exposes no resumable cursor. `fetch_logs` returns whatever
//! window is currently available; exact resumption is the caller's job via
//! client-side filtering. `completion_timestamp` is the only signal that a
//! workload has finished.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::LogStreamError;
use crate::identity::InstanceId;
use crate::record::LogRecord;

/// Client for the container-orchestration platform's log API.
#[async_trait]
pub trait OrchestrationClient: Send + Sync {
    /// Fetches the platform's currently-available log window for the instance,
    /// with the timestamp of the newest returned record. `since` is a
    /// server-side hint only and may be ignored by the platform; `stream`
    /// requests the tailing endpoint where the platform distinguishes one.
    async fn fetch_logs(
        &self,
        instance_id: &str,
        since: Option<DateTime<Utc>>,
        stream: bool,
    ) -> Result<(Vec<LogRecord>, Option<DateTime<Utc>>), LogStreamError>;

    /// Completion instant reported by the platform, when the workload finished.
    async fn completion_timestamp(
        &self,
        instance_id: &str,
    ) -> Result<Option<DateTime<Utc>>, LogStreamError>;
}

/// Scripted in-memory client: holds a log window and an optional completion
/// instant per instance. Test double and local development backend.
pub struct ScriptedOrchestration {
    windows: RwLock<HashMap<InstanceId, Vec<LogRecord>>>,
    completions: RwLock<HashMap<InstanceId, DateTime<Utc>>>,
}

impl ScriptedOrchestration {
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            completions: RwLock::new(HashMap::new()),
        }
    }

    /// Appends records to the instance's available window.
    pub fn push_records(&self, instance_id: impl Into<InstanceId>, records: Vec<LogRecord>) {
        if let Ok(mut windows) = self.windows.write() {
            windows.entry(instance_id.into()).or_default().extend(records);
        }
    }

    /// Drops the oldest records so only `keep` remain, mimicking a platform
    /// that ages lines out of its window.
    pub fn truncate_window(&self, instance_id: &str, keep: usize) {
        if let Ok(mut windows) = self.windows.write() {
            if let Some(window) = windows.get_mut(instance_id) {
                let excess = window.len().saturating_sub(keep);
                window.drain(..excess);
            }
        }
    }

    /// Marks the instance's workload as finished at `at`.
    pub fn complete(&self, instance_id: impl Into<InstanceId>, at: DateTime<Utc>) {
        if let Ok(mut completions) = self.completions.write() {
            completions.insert(instance_id.into(), at);
        }
    }
}

impl Default for ScriptedOrchestration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrchestrationClient for ScriptedOrchestration {
    async fn fetch_logs(
        &self,
        instance_id: &str,
        since: Option<DateTime<Utc>>,
        _stream: bool,
    ) -> Result<(Vec<LogRecord>, Option<DateTime<Utc>>), LogStreamError> {
        let windows = self
            .windows
            .read()
            .map_err(|e| LogStreamError::OrchestrationUnavailable(e.to_string()))?;
        let mut records: Vec<LogRecord> = windows.get(instance_id).cloned().unwrap_or_default();
        if let Some(since) = since {
            records.retain(|r| r.timestamp > since);
        }
        records.sort_by_key(|r| r.timestamp);
        let last = records.last().map(|r| r.timestamp);
        Ok((records, last))
    }

    async fn completion_timestamp(
        &self,
        instance_id: &str,
    ) -> Result<Option<DateTime<Utc>>, LogStreamError> {
        let completions = self
            .completions
            .read()
            .map_err(|e| LogStreamError::OrchestrationUnavailable(e.to_string()))?;
        Ok(completions.get(instance_id).copied())
    }
}
