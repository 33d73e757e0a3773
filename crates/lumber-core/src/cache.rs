//! Read-through cache for archived chunk content.
//!
//! Chunks are immutable once written, so an entry never needs invalidation
//! and concurrent populates race only on duplicate work. Insert-if-absent
//! keeps the first value; the cache is owned by the hosting service and
//! injected into the engine. A cold cache re-reads from the backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{ChunkId, RunId};
use crate::record::LogRecord;

/// Parsed-record cache keyed by (run, chunk).
pub struct ChunkCache {
    entries: RwLock<HashMap<(RunId, ChunkId), Arc<Vec<LogRecord>>>>,
}

impl ChunkCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached records for the chunk. A poisoned lock degrades to a miss.
    pub fn get(&self, run_id: &str, chunk: &str) -> Option<Arc<Vec<LogRecord>>> {
        let entries = self.entries.read().ok()?;
        entries.get(&(run_id.to_string(), chunk.to_string())).cloned()
    }

    /// Stores the records unless an entry already exists, and returns the
    /// entry that won. A poisoned lock degrades to not caching.
    pub fn put_if_absent(
        &self,
        run_id: &str,
        chunk: &str,
        records: Vec<LogRecord>,
    ) -> Arc<Vec<LogRecord>> {
        let records = Arc::new(records);
        match self.entries.write() {
            Ok(mut entries) => entries
                .entry((run_id.to_string(), chunk.to_string()))
                .or_insert_with(|| Arc::clone(&records))
                .clone(),
            Err(_) => records,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChunkCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheaply cloneable cache handle so the hosting service and concurrent
/// pollers can share one cache.
#[derive(Clone, Default)]
pub struct SharedChunkCache(pub Arc<ChunkCache>);

impl SharedChunkCache {
    pub fn new() -> Self {
        Self(Arc::new(ChunkCache::new()))
    }

    pub fn get(&self, run_id: &str, chunk: &str) -> Option<Arc<Vec<LogRecord>>> {
        self.0.get(run_id, chunk)
    }

    pub fn put_if_absent(
        &self,
        run_id: &str,
        chunk: &str,
        records: Vec<LogRecord>,
    ) -> Arc<Vec<LogRecord>> {
        self.0.put_if_absent(run_id, chunk, records)
    }
}
