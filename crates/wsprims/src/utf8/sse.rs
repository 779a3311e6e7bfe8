//! 128-bit tiers.
//!
//! Both tiers walk the input in aligned 16-byte blocks. A block that is all
//! ASCII while the automaton rests in ACCEPT cannot change the state and is
//! skipped; any other block is stepped byte by byte with the branching
//! transition. The unaligned head and tail are always stepped per byte.
//!
//! On targets without these instruction sets (or with the `simd` feature
//! off) the tiers fall back to [`UnrolledDfa`].

use super::{dfa::Scan, scalar::UnrolledDfa, tier::ValidateTier};

pub(crate) struct Sse2Dfa;

impl ValidateTier for Sse2Dfa {
    #[inline]
    fn run(state: u8, bytes: &[u8]) -> Scan {
        imp::sse2(state, bytes).unwrap_or_else(|| UnrolledDfa::run(state, bytes))
    }
}

pub(crate) struct Sse41Dfa;

impl ValidateTier for Sse41Dfa {
    #[inline]
    fn run(state: u8, bytes: &[u8]) -> Scan {
        imp::sse41(state, bytes).unwrap_or_else(|| UnrolledDfa::run(state, bytes))
    }
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
mod imp {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{
        __m128i, _mm_load_si128, _mm_movemask_epi8, _mm_set1_epi8, _mm_testz_si128,
    };
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{
        __m128i, _mm_load_si128, _mm_movemask_epi8, _mm_set1_epi8, _mm_testz_si128,
    };

    use crate::{
        cpu,
        utf8::dfa::{self, ACCEPT, Scan},
    };

    const BLOCK: usize = 16;

    #[inline]
    pub(super) fn sse2(state: u8, bytes: &[u8]) -> Option<Scan> {
        if !cpu::has_sse2() {
            return None;
        }
        // SAFETY: SSE2 support was checked above.
        Some(unsafe { validate_sse2(state, bytes) })
    }

    #[inline]
    pub(super) fn sse41(state: u8, bytes: &[u8]) -> Option<Scan> {
        if !cpu::has_sse41() {
            return None;
        }
        // SAFETY: SSE4.1 support was checked above.
        Some(unsafe { validate_sse41(state, bytes) })
    }

    /// # Safety
    ///
    /// The CPU must support SSE2.
    #[target_feature(enable = "sse2")]
    unsafe fn validate_sse2(state: u8, bytes: &[u8]) -> Scan {
        // SAFETY: every bit pattern is a valid `__m128i`.
        let (head, blocks, _) = unsafe { bytes.align_to::<__m128i>() };

        let scan = dfa::run_with(state, head, dfa::transition);
        if scan.rejected() {
            return scan;
        }
        let mut state = scan.state;
        let mut base = head.len();

        for block in blocks {
            // SAFETY: `align_to` yields 16-byte aligned blocks.
            let high_bits = unsafe { _mm_movemask_epi8(_mm_load_si128(block)) };
            if state != ACCEPT || high_bits != 0 {
                let scan = dfa::run_with(state, &bytes[base..base + BLOCK], dfa::transition);
                if scan.rejected() {
                    return scan.offset_by(base);
                }
                state = scan.state;
            }
            base += BLOCK;
        }

        dfa::run_with(state, &bytes[base..], dfa::transition).offset_by(base)
    }

    /// # Safety
    ///
    /// The CPU must support SSE4.1.
    #[target_feature(enable = "sse4.1")]
    unsafe fn validate_sse41(state: u8, bytes: &[u8]) -> Scan {
        // SAFETY: every bit pattern is a valid `__m128i`.
        let (head, blocks, _) = unsafe { bytes.align_to::<__m128i>() };

        let scan = dfa::run_with(state, head, dfa::transition);
        if scan.rejected() {
            return scan;
        }
        let mut state = scan.state;
        let mut base = head.len();
        // SAFETY: SSE2 is implied by SSE4.1. Rust 1.87+ no longer needs the
        // block inside a `target_feature` fn.
        #[allow(unused_unsafe)]
        let high = unsafe { _mm_set1_epi8(i8::MIN) };

        for block in blocks {
            // SAFETY: `align_to` yields 16-byte aligned blocks.
            let ascii = unsafe { _mm_testz_si128(_mm_load_si128(block), high) } == 1;
            if state != ACCEPT || !ascii {
                let scan = dfa::run_with(state, &bytes[base..base + BLOCK], dfa::transition);
                if scan.rejected() {
                    return scan.offset_by(base);
                }
                state = scan.state;
            }
            base += BLOCK;
        }

        dfa::run_with(state, &bytes[base..], dfa::transition).offset_by(base)
    }
}

#[cfg(not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))))]
mod imp {
    use crate::utf8::dfa::Scan;

    #[inline]
    pub(super) fn sse2(_state: u8, _bytes: &[u8]) -> Option<Scan> {
        None
    }

    #[inline]
    pub(super) fn sse41(_state: u8, _bytes: &[u8]) -> Option<Scan> {
        None
    }
}
