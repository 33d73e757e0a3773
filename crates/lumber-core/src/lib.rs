//! # lumber-core
//!
//! Data model and backend seams for the lumber log retrieval engine:
//! the structured [LogRecord], the shared line-oriented record parser,
//! the error taxonomy, and the capability traits behind which archived
//! chunks, temp buffers, and the live orchestration feed live.
//!
//! The engine itself (catalog, cursor, readers, merger, live query) is
//! in `lumber-streams`; this crate holds everything it is built from.

pub mod cache;
pub mod error;
pub mod identity;
pub mod layout;
pub mod orchestration;
pub mod parser;
pub mod record;
pub mod storage;

pub use cache::{ChunkCache, SharedChunkCache};
pub use error::LogStreamError;
pub use identity::{ChunkId, InstanceId, RunId};
pub use layout::LogLayout;
pub use orchestration::{OrchestrationClient, ScriptedOrchestration};
pub use parser::{parse_content, parse_line, ParsedContent};
pub use record::LogRecord;
pub use storage::{InMemoryStorage, LocalFileStorage, StorageBackend};
