//! Retrieval entry points, one per log source, plus the caller-facing
//! pagination contract and the run-phase helper that selects the source.
//!
//! A hosting poller invokes one entry point per round and threads the
//! returned cursor into the next call. Batches are all-or-nothing: a failed
//! fetch returns an error and zero records, so retrying with the same cursor
//! never skips data.

pub mod archived;
pub mod catalog;
pub mod cursor;
pub mod live;
pub mod pagination;
pub mod phase;
pub mod temp;

pub use archived::{fetch_archived, read_chunk, ArchivedBatch};
pub use catalog::list_chunks;
pub use cursor::next_chunk;
pub use live::query_live;
pub use pagination::{LogPageRequest, LogPageResponse};
pub use phase::RunLogPhase;
pub use temp::merge_temp;
