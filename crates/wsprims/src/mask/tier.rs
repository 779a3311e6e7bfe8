use super::{scalar::Simple, sse2::Sse2};
use crate::{
    UnknownTier,
    cpu::{self, SimdLevel},
};

/// One interchangeable implementation of the masking loop.
///
/// `apply` XORs `buf[i]` with `key[(position + i) % 4]`; the caller advances
/// the position.
pub(crate) trait MaskApply {
    fn apply(key: [u8; 4], position: usize, buf: &mut [u8]);
}

/// Execution strategy of an [`XorMasker`](crate::XorMasker).
///
/// Discriminants are stable wire codes; code `0` is reserved for "optimal".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MaskTier {
    /// Byte-at-a-time XOR.
    Simple = 1,
    /// 16-byte SSE2 blocks with a pre-rotated mask.
    Sse2 = 2,
}

impl MaskTier {
    /// Every tier, slowest first.
    pub const ALL: [MaskTier; 2] = [MaskTier::Simple, MaskTier::Sse2];

    /// Wire code of this tier.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Instruction set this tier needs.
    #[must_use]
    pub const fn required_level(self) -> SimdLevel {
        match self {
            MaskTier::Simple => SimdLevel::Scalar,
            MaskTier::Sse2 => SimdLevel::Sse2,
        }
    }

    /// Whether the running CPU can execute this tier.
    #[must_use]
    pub fn is_available(self) -> bool {
        self.required_level() <= cpu::simd_level()
    }

    /// Fastest tier the running CPU supports.
    #[must_use]
    pub fn best_available() -> Self {
        if MaskTier::Sse2.is_available() {
            MaskTier::Sse2
        } else {
            MaskTier::Simple
        }
    }

    /// Resolve a request to the tier that will actually run; see
    /// [`Utf8Tier::resolve`](crate::Utf8Tier::resolve).
    #[must_use]
    pub fn resolve(request: Option<Self>) -> Self {
        match request {
            None => Self::best_available(),
            Some(tier) if tier.is_available() => tier,
            Some(tier) => Self::best_available().min(tier),
        }
    }

    #[inline]
    pub(crate) fn apply(self, key: [u8; 4], position: usize, buf: &mut [u8]) {
        match self {
            MaskTier::Simple => Simple::apply(key, position, buf),
            MaskTier::Sse2 => Sse2::apply(key, position, buf),
        }
    }
}

impl TryFrom<u8> for MaskTier {
    type Error = UnknownTier;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.code() == code)
            .ok_or(UnknownTier(code))
    }
}
