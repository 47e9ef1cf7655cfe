//! Chunk assembly: arrival order in, one contiguous buffer out.

/// Concatenates chunks in arrival order into a buffer sized exactly to the
/// sum of the chunk lengths.
pub fn assemble_chunks(chunks: Vec<Vec<u8>>) -> Vec<u8> {
    let total: usize = chunks.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for chunk in &chunks {
        out.extend_from_slice(chunk);
    }
    debug_assert_eq!(out.len(), total);
    out
}
