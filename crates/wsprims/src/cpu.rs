//! Process-wide vector capability detection.
//!
//! Detection runs once and the result is cached in an atomic. Racing
//! detections store the same value, so re-detection is harmless.

use core::sync::atomic::{AtomicU8, Ordering};

/// Vector instruction sets usable by the execution tiers, in ascending order
/// of capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SimdLevel {
    /// No usable vector instructions (or the `simd` feature is off).
    Scalar = 0,
    /// x86 SSE2.
    Sse2 = 1,
    /// x86 SSE4.1 (implies SSE2).
    Sse41 = 2,
}

const UNINIT: u8 = 0xFF;

static SIMD_LEVEL: AtomicU8 = AtomicU8::new(UNINIT);

/// Highest vector instruction set available on the running CPU.
#[inline]
pub fn simd_level() -> SimdLevel {
    match SIMD_LEVEL.load(Ordering::Relaxed) {
        0 => SimdLevel::Scalar,
        1 => SimdLevel::Sse2,
        2 => SimdLevel::Sse41,
        _ => {
            let level = detect();
            SIMD_LEVEL.store(level as u8, Ordering::Relaxed);
            level
        }
    }
}

#[inline]
#[cfg_attr(
    not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))),
    allow(dead_code)
)]
pub(crate) fn has_sse2() -> bool {
    simd_level() >= SimdLevel::Sse2
}

#[inline]
#[cfg_attr(
    not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))),
    allow(dead_code)
)]
pub(crate) fn has_sse41() -> bool {
    simd_level() >= SimdLevel::Sse41
}

#[cold]
fn detect() -> SimdLevel {
    #[cfg(all(
        feature = "simd",
        feature = "std",
        any(target_arch = "x86", target_arch = "x86_64")
    ))]
    {
        if std::is_x86_feature_detected!("sse4.1") {
            return SimdLevel::Sse41;
        }
        if std::is_x86_feature_detected!("sse2") {
            return SimdLevel::Sse2;
        }
    }

    #[cfg(all(
        feature = "simd",
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64")
    ))]
    {
        if cfg!(target_feature = "sse4.1") {
            return SimdLevel::Sse41;
        }
        if cfg!(target_feature = "sse2") {
            return SimdLevel::Sse2;
        }
    }

    SimdLevel::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_is_stable() {
        let first = simd_level();
        assert_eq!(first, simd_level());
        assert_eq!(first, detect());
    }

    #[test]
    fn levels_are_ordered() {
        assert!(SimdLevel::Scalar < SimdLevel::Sse2);
        assert!(SimdLevel::Sse2 < SimdLevel::Sse41);
    }

    #[cfg(all(feature = "simd", feature = "std", target_arch = "x86_64"))]
    #[test]
    fn x86_64_always_has_sse2() {
        assert!(has_sse2());
    }
}
