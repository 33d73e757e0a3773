//! Archived chunk catalog: the manifest of a run's rotated log chunks.
//!
//! Chunk names are assigned by the archiver so that lexicographic order
//! equals chronological order; the catalog relies on that to return the
//! manifest in delivery order. A run whose archived prefix does not exist
//! yet is an empty manifest, not an error.

use lumber_core::{ChunkId, LogLayout, LogStreamError, StorageBackend};

/// Lists the run's known chunks, lexicographically ordered.
pub async fn list_chunks(
    storage: &dyn StorageBackend,
    layout: &LogLayout,
    run_id: &str,
) -> Result<Vec<ChunkId>, LogStreamError> {
    let mut chunks = storage.list(&layout.archived_prefix(run_id)).await?;
    chunks.sort();
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumber_core::InMemoryStorage;

    #[tokio::test]
    async fn missing_prefix_is_empty_manifest() {
        let storage = InMemoryStorage::new();
        let chunks = list_chunks(&storage, &LogLayout::default(), "run-1")
            .await
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn manifest_is_lexicographically_ordered() {
        let storage = InMemoryStorage::new();
        storage.insert("run-1/logs/chunk-010", "");
        storage.insert("run-1/logs/chunk-002", "");
        storage.insert("run-1/logs/chunk-000", "");

        let chunks = list_chunks(&storage, &LogLayout::default(), "run-1")
            .await
            .unwrap();
        assert_eq!(chunks, vec!["chunk-000", "chunk-002", "chunk-010"]);
    }
}
