//! Storage backend seam: archived chunks and temp buffers live behind this trait.
//!
//! **Constraints (must hold in all implementations and tests):**
//! - `list(prefix)` returns the names directly under the prefix; an absent
//!   prefix is an empty listing, not an error.
//! - `read(path)` is a whole-object read; a failed read returns an error and
//!   no partial content.
//! - Failures map to [LogStreamError::BackendUnavailable] and are retryable.

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::LogStreamError;

/// Pluggable storage holding a run's log tree.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Names of the entries directly under `prefix`, unordered.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, LogStreamError>;

    /// Full content of the object at `path`.
    async fn read(&self, path: &str) -> Result<Vec<u8>, LogStreamError>;

    /// Whether an object exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool, LogStreamError>;
}

/// In-memory storage: one flat map from slash-separated paths to bytes.
/// Serves as the test double and as embedded storage for hosts that keep
/// log trees in memory.
pub struct InMemoryStorage {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Puts an object, replacing any previous content at the path.
    pub fn insert(&self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        if let Ok(mut objects) = self.objects.write() {
            objects.insert(path.into(), content.into());
        }
    }

    /// Removes the object at the path, if present.
    pub fn remove(&self, path: &str) {
        if let Ok(mut objects) = self.objects.write() {
            objects.remove(path);
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, LogStreamError> {
        let objects = self
            .objects
            .read()
            .map_err(|e| LogStreamError::BackendUnavailable(e.to_string()))?;
        let dir = format!("{}/", prefix.trim_end_matches('/'));
        let names: BTreeSet<String> = objects
            .keys()
            .filter_map(|key| key.strip_prefix(&dir))
            .map(|rest| rest.split('/').next().unwrap_or(rest).to_string())
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, LogStreamError> {
        let objects = self
            .objects
            .read()
            .map_err(|e| LogStreamError::BackendUnavailable(e.to_string()))?;
        objects
            .get(path)
            .cloned()
            .ok_or_else(|| LogStreamError::BackendUnavailable(format!("no object at {path}")))
    }

    async fn exists(&self, path: &str) -> Result<bool, LogStreamError> {
        let objects = self
            .objects
            .read()
            .map_err(|e| LogStreamError::BackendUnavailable(e.to_string()))?;
        Ok(objects.contains_key(path))
    }
}

/// Filesystem storage rooted at a directory; paths are resolved below the root.
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl StorageBackend for LocalFileStorage {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, LogStreamError> {
        let dir = self.resolve(prefix);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LogStreamError::BackendUnavailable(e.to_string())),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LogStreamError::BackendUnavailable(e.to_string()))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, LogStreamError> {
        tokio::fs::read(self.resolve(path))
            .await
            .map_err(|e| LogStreamError::BackendUnavailable(e.to_string()))
    }

    async fn exists(&self, path: &str) -> Result<bool, LogStreamError> {
        match tokio::fs::metadata(self.resolve(path)).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(LogStreamError::BackendUnavailable(e.to_string())),
        }
    }
}
