//! Archived retrieval: one immutable chunk per call, read through the cache.
//!
//! Pagination model: the caller passes the last chunk it consumed; the engine
//! lists the manifest, advances the cursor, and returns that chunk's records
//! together with the consumed chunk name and the full manifest. Chunk content
//! never changes after rotation, so a cache entry is valid forever. A backend
//! read failure propagates with zero records and no cached fallback.

use lumber_core::{
    parse_content, ChunkCache, ChunkId, LogLayout, LogRecord, LogStreamError, StorageBackend,
};

use crate::streams::catalog::list_chunks;
use crate::streams::cursor::next_chunk;

/// One page of archived logs.
#[derive(Clone, Debug)]
pub struct ArchivedBatch {
    /// Records of the consumed chunk, in chunk order.
    pub records: Vec<LogRecord>,
    /// Chunk consumed by this call; `None` when the run is caught up.
    pub last_file: Option<ChunkId>,
    /// Full manifest known at call time.
    pub files: Vec<ChunkId>,
}

/// Fetches the next unread chunk after `last_file`.
pub async fn fetch_archived(
    storage: &dyn StorageBackend,
    layout: &LogLayout,
    cache: &ChunkCache,
    run_id: &str,
    last_file: Option<&str>,
    use_cache: bool,
) -> Result<ArchivedBatch, LogStreamError> {
    let files = list_chunks(storage, layout, run_id).await?;
    let chunk = match next_chunk(&files, last_file) {
        Some(chunk) => chunk.clone(),
        None => {
            return Ok(ArchivedBatch {
                records: Vec::new(),
                last_file: None,
                files,
            })
        }
    };
    let records = read_chunk(storage, layout, cache, run_id, &chunk, use_cache).await?;
    Ok(ArchivedBatch {
        records,
        last_file: Some(chunk),
        files,
    })
}

/// Fetches and parses one chunk, serving immutable content from the cache
/// when allowed. With `use_cache` off the backend is read every time and the
/// cache is left untouched.
pub async fn read_chunk(
    storage: &dyn StorageBackend,
    layout: &LogLayout,
    cache: &ChunkCache,
    run_id: &str,
    chunk: &str,
    use_cache: bool,
) -> Result<Vec<LogRecord>, LogStreamError> {
    if use_cache {
        if let Some(hit) = cache.get(run_id, chunk) {
            tracing::debug!(run_id, chunk, "archived chunk served from cache");
            return Ok(hit.as_ref().clone());
        }
    }
    let bytes = storage.read(&layout.chunk_path(run_id, chunk)).await?;
    let parsed = parse_content(&String::from_utf8_lossy(&bytes));
    if use_cache {
        let entry = cache.put_if_absent(run_id, chunk, parsed.records);
        return Ok(entry.as_ref().clone());
    }
    Ok(parsed.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lumber_core::InMemoryStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Wraps a backend and counts reads, to observe cache behavior.
    struct CountingStorage {
        inner: InMemoryStorage,
        reads: AtomicUsize,
    }

    impl CountingStorage {
        fn new(inner: InMemoryStorage) -> Self {
            Self {
                inner,
                reads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StorageBackend for CountingStorage {
        async fn list(&self, prefix: &str) -> Result<Vec<String>, LogStreamError> {
            self.inner.list(prefix).await
        }

        async fn read(&self, path: &str) -> Result<Vec<u8>, LogStreamError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(path).await
        }

        async fn exists(&self, path: &str) -> Result<bool, LogStreamError> {
            self.inner.exists(path).await
        }
    }

    fn seeded_storage() -> InMemoryStorage {
        let storage = InMemoryStorage::new();
        storage.insert(
            "run-1/logs/chunk-000",
            "2024-05-01T10:00:00Z first\n2024-05-01T10:00:01Z second\n",
        );
        storage.insert("run-1/logs/chunk-001", "2024-05-01T10:01:00Z third\n");
        storage
    }

    #[tokio::test]
    async fn pages_through_chunks_then_reports_caught_up() {
        let storage = seeded_storage();
        let layout = LogLayout::default();
        let cache = ChunkCache::new();

        let first = fetch_archived(&storage, &layout, &cache, "run-1", None, true)
            .await
            .unwrap();
        assert_eq!(first.last_file.as_deref(), Some("chunk-000"));
        assert_eq!(first.records.len(), 2);
        assert_eq!(first.files, vec!["chunk-000", "chunk-001"]);

        let second = fetch_archived(&storage, &layout, &cache, "run-1", Some("chunk-000"), true)
            .await
            .unwrap();
        assert_eq!(second.last_file.as_deref(), Some("chunk-001"));
        assert_eq!(second.records[0].message, "third");

        let third = fetch_archived(&storage, &layout, &cache, "run-1", Some("chunk-001"), true)
            .await
            .unwrap();
        assert!(third.records.is_empty());
        assert_eq!(third.last_file, None);
        assert_eq!(third.files, vec!["chunk-000", "chunk-001"]);
    }

    #[tokio::test]
    async fn repeated_fetch_is_served_from_cache() {
        let storage = CountingStorage::new(seeded_storage());
        let layout = LogLayout::default();
        let cache = ChunkCache::new();

        let first = fetch_archived(&storage, &layout, &cache, "run-1", None, true)
            .await
            .unwrap();
        let again = fetch_archived(&storage, &layout, &cache, "run-1", None, true)
            .await
            .unwrap();
        assert_eq!(first.records, again.records);
        assert_eq!(storage.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cache_bypass_reads_backend_every_time() {
        let storage = CountingStorage::new(seeded_storage());
        let layout = LogLayout::default();
        let cache = ChunkCache::new();

        fetch_archived(&storage, &layout, &cache, "run-1", None, false)
            .await
            .unwrap();
        fetch_archived(&storage, &layout, &cache, "run-1", None, false)
            .await
            .unwrap();
        assert_eq!(storage.reads.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn corrupt_chunk_is_success_with_zero_records() {
        let storage = InMemoryStorage::new();
        storage.insert("run-1/logs/chunk-000", "not\na\nlog\n");
        let cache = ChunkCache::new();

        let batch = fetch_archived(&storage, &LogLayout::default(), &cache, "run-1", None, true)
            .await
            .unwrap();
        assert!(batch.records.is_empty());
        assert_eq!(batch.last_file.as_deref(), Some("chunk-000"));
    }

    #[tokio::test]
    async fn no_logs_yet_is_empty_batch() {
        let storage = InMemoryStorage::new();
        let cache = ChunkCache::new();
        let batch = fetch_archived(&storage, &LogLayout::default(), &cache, "run-9", None, true)
            .await
            .unwrap();
        assert!(batch.records.is_empty());
        assert_eq!(batch.last_file, None);
        assert!(batch.files.is_empty());
    }
}
