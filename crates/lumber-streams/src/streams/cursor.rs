//! Cursor advancement over the archived chunk manifest.

use lumber_core::ChunkId;

/// Returns the next unread chunk after `last_consumed`.
///
/// - empty manifest → `None`;
/// - no cursor yet → the first chunk;
/// - cursor found at index i → chunk i+1, or `None` when i is last;
/// - cursor chunk missing from the manifest (rotation/compaction removed
///   it) → `None`. The run is treated as caught up rather than resent from
///   the first available chunk, which would re-deliver lines the caller
///   already forwarded.
pub fn next_chunk<'a>(chunks: &'a [ChunkId], last_consumed: Option<&str>) -> Option<&'a ChunkId> {
    let last = match last_consumed {
        None => return chunks.first(),
        Some(last) => last,
    };
    match chunks.iter().position(|chunk| chunk == last) {
        Some(i) => chunks.get(i + 1),
        None => {
            if !chunks.is_empty() {
                tracing::warn!(
                    last_consumed = last,
                    "cursor chunk missing from manifest, treating run as caught up"
                );
            }
            None
        }
    }
}
