//! Path layout of a run's log tree inside the storage backend.
//!
//! Hosting services relocate the tree by deserializing a different layout;
//! the engine never hardcodes prefixes.

use serde::{Deserialize, Serialize};

/// Prefix configuration for one log tree. Paths are slash-separated and
/// relative to the backend root: `{run_id}/{archived_dir}/{chunk}` for
/// immutable chunks, `{run_id}/{temp_dir}/{writer}` for temp buffers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLayout {
    pub archived_dir: String,
    pub temp_dir: String,
}

impl Default for LogLayout {
    fn default() -> Self {
        Self {
            archived_dir: "logs".to_string(),
            temp_dir: "tmplogs".to_string(),
        }
    }
}

impl LogLayout {
    /// Prefix holding the run's archived chunks.
    pub fn archived_prefix(&self, run_id: &str) -> String {
        format!("{run_id}/{}", self.archived_dir)
    }

    /// Prefix holding the run's temp buffer files.
    pub fn temp_prefix(&self, run_id: &str) -> String {
        format!("{run_id}/{}", self.temp_dir)
    }

    pub fn chunk_path(&self, run_id: &str, chunk: &str) -> String {
        format!("{}/{chunk}", self.archived_prefix(run_id))
    }

    pub fn temp_path(&self, run_id: &str, name: &str) -> String {
        format!("{}/{name}", self.temp_prefix(run_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let layout = LogLayout::default();
        assert_eq!(layout.archived_prefix("run-1"), "run-1/logs");
        assert_eq!(layout.chunk_path("run-1", "chunk-000"), "run-1/logs/chunk-000");
        assert_eq!(layout.temp_path("run-1", "w0"), "run-1/tmplogs/w0");
    }

    #[test]
    fn layout_round_trips_through_json() {
        let layout = LogLayout {
            archived_dir: "rotated".into(),
            temp_dir: "buffers".into(),
        };
        let json = serde_json::to_string(&layout).unwrap();
        let back: LogLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
