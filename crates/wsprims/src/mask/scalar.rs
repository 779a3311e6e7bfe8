use super::tier::MaskApply;

pub(crate) struct Simple;

impl MaskApply for Simple {
    #[inline]
    fn apply(key: [u8; 4], position: usize, buf: &mut [u8]) {
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte ^= key[position.wrapping_add(i) & 3];
        }
    }
}

/// Repeat `key` over `N` bytes, starting at key byte `position % 4`.
#[inline]
#[cfg_attr(
    not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))),
    allow(dead_code)
)]
pub(crate) fn rotated_pattern<const N: usize>(key: [u8; 4], position: usize) -> [u8; N] {
    let mut pattern = [0u8; N];
    for (i, byte) in pattern.iter_mut().enumerate() {
        *byte = key[position.wrapping_add(i) & 3];
    }
    pattern
}
