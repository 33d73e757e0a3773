//! # lumber-streams
//!
//! Incremental log retrieval engine for workload runs. Serves paginated and
//! tailing reads from three inconsistent sources and reconciles them into
//! chronologically ordered, non-duplicating batches:
//!
//! - **Archived** — immutable chunks in a [StorageBackend], paged by chunk
//!   name ([streams::catalog], [streams::cursor], [streams::archived]).
//! - **Temp** — still-growing per-writer buffers, merged and paged by
//!   timestamp ([streams::temp]).
//! - **Live** — the orchestration platform's non-resumable feed, filtered
//!   client-side ([streams::live]).
//!
//! Cursors are caller-owned values threaded between calls; the engine holds
//! no session state, so operations for different runs are freely concurrent.
//!
//! [StorageBackend]: lumber_core::StorageBackend

pub mod streams;

pub use streams::archived::{fetch_archived, read_chunk, ArchivedBatch};
pub use streams::catalog::list_chunks;
pub use streams::cursor::next_chunk;
pub use streams::live::query_live;
pub use streams::pagination::{LogPageRequest, LogPageResponse};
pub use streams::phase::RunLogPhase;
pub use streams::temp::merge_temp;
