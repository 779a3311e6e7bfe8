//! SSE2 masking tier.
//!
//! The unaligned head is masked with the scalar loop. The mask for the
//! aligned 16-byte blocks is then rebuilt from the key, rotated to the
//! position reached after the head; since 16 is a multiple of 4 the same
//! pattern serves every block. The tail goes back to the scalar loop.

use super::{scalar::Simple, tier::MaskApply};

pub(crate) struct Sse2;

impl MaskApply for Sse2 {
    #[inline]
    fn apply(key: [u8; 4], position: usize, buf: &mut [u8]) {
        if !imp::apply(key, position, buf) {
            Simple::apply(key, position, buf);
        }
    }
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
mod imp {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{__m128i, _mm_loadu_si128, _mm_xor_si128};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{__m128i, _mm_loadu_si128, _mm_xor_si128};

    use crate::{
        cpu,
        mask::{
            scalar::{Simple, rotated_pattern},
            tier::MaskApply,
        },
    };

    const BLOCK: usize = 16;

    /// Returns `false` without touching `buf` if SSE2 is unavailable.
    #[inline]
    pub(super) fn apply(key: [u8; 4], position: usize, buf: &mut [u8]) -> bool {
        if !cpu::has_sse2() {
            return false;
        }
        // SAFETY: SSE2 support was checked above.
        unsafe { mask_sse2(key, position, buf) };
        true
    }

    /// # Safety
    ///
    /// The CPU must support SSE2.
    #[target_feature(enable = "sse2")]
    unsafe fn mask_sse2(key: [u8; 4], position: usize, buf: &mut [u8]) {
        // SAFETY: every bit pattern is a valid `__m128i`.
        let (head, blocks, tail) = unsafe { buf.align_to_mut::<__m128i>() };

        Simple::apply(key, position, head);
        let position = position.wrapping_add(head.len());

        if !blocks.is_empty() {
            let pattern = rotated_pattern::<BLOCK>(key, position);
            // SAFETY: `pattern` is 16 readable bytes; unaligned load.
            let mask = unsafe { _mm_loadu_si128(pattern.as_ptr().cast()) };
            for block in blocks.iter_mut() {
                // SAFETY: SSE2 is enabled for this function. Rust 1.87+ no
                // longer needs the block inside a `target_feature` fn.
                #[allow(unused_unsafe)]
                let masked = unsafe { _mm_xor_si128(*block, mask) };
                *block = masked;
            }
        }

        let position = position.wrapping_add(blocks.len() * BLOCK);
        Simple::apply(key, position, tail);
    }
}

#[cfg(not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))))]
mod imp {
    #[inline]
    pub(super) fn apply(_key: [u8; 4], _position: usize, _buf: &mut [u8]) -> bool {
        false
    }
}
