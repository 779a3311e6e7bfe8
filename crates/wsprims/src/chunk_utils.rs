use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Chunk boundaries ignore code point boundaries on purpose: validators and
/// maskers must resume correctly in the middle of a sequence.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}
