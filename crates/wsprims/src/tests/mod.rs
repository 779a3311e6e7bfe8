
use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::Verdict;

/// Cut `bytes` at the positions derived from `splits`, the same way the
/// partition properties consume their split vectors.
pub(crate) fn partition<'a>(bytes: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut idx = 0;
    for &s in splits {
        let remaining = bytes.len() - idx;
        if remaining == 0 {
            break;
        }
        let size = 1 + (s % remaining);
        chunks.push(&bytes[idx..idx + size]);
        idx += size;
    }
    if idx < bytes.len() {
        chunks.push(&bytes[idx..]);
    }
    chunks
}

/// Expected one-shot verdict, derived from `bstr`'s decoder.
///
/// A maximal ill-formed subpart that starts with a valid lead byte is
/// rejected by the automaton at the byte after the subpart; any other
/// subpart is rejected at its first byte.
pub(crate) fn oracle(bytes: &[u8]) -> Verdict {
    match bytes.to_str() {
        Ok(_) => Verdict::Valid,
        Err(err) => match err.error_len() {
            None => Verdict::Incomplete,
            Some(len) => {
                let start = err.valid_up_to();
                let offset = if matches!(bytes[start], 0xC2..=0xF4) {
                    start + len
                } else {
                    start
                };
                Verdict::Invalid {
                    offset,
                    total: offset,
                }
            }
        },
    }
}

fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
