//! Identity types for the lumber engine.
//!
//! RunId names one execution of a workload whose logs are being retrieved;
//! InstanceId is the orchestration platform's identity for the running instance;
//! ChunkId names one immutable archived log chunk.

/// Identifies one execution of a workload.
pub type RunId = String;

/// Orchestration-platform identity of a running instance (e.g. pod name).
pub type InstanceId = String;

/// Name of one archived log chunk. Chunk naming must guarantee that
/// lexicographic order over ChunkIds equals chronological order.
pub type ChunkId = String;
