use super::{
    dfa::Scan,
    scalar::{TableDfa, UnrolledDfa},
    sse::{Sse2Dfa, Sse41Dfa},
};
use crate::{
    UnknownTier,
    cpu::{self, SimdLevel},
};

/// One interchangeable implementation of the validator's core loop.
///
/// Implementations must be observably identical to stepping the automaton
/// one byte at a time from `state`.
pub(crate) trait ValidateTier {
    fn run(state: u8, bytes: &[u8]) -> Scan;
}

/// Execution strategy of a [`Utf8Validator`](crate::Utf8Validator).
///
/// Discriminants are stable wire codes; code `0` is reserved for "optimal"
/// and maps to `None` in [`Utf8Validator::set_tier`](crate::Utf8Validator::set_tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Utf8Tier {
    /// Two-level table lookup per byte.
    TableDfa = 1,
    /// Branching transition per byte.
    UnrolledDfa = 2,
    /// 16-byte SSE2 blocks with an ASCII fast path.
    Sse2Dfa = 3,
    /// 16-byte SSE4.1 blocks with a `ptest` ASCII fast path.
    Sse41Dfa = 4,
}

impl Utf8Tier {
    /// Every tier, slowest first.
    pub const ALL: [Utf8Tier; 4] = [
        Utf8Tier::TableDfa,
        Utf8Tier::UnrolledDfa,
        Utf8Tier::Sse2Dfa,
        Utf8Tier::Sse41Dfa,
    ];

    /// Wire code of this tier.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Instruction set this tier needs.
    #[must_use]
    pub const fn required_level(self) -> SimdLevel {
        match self {
            Utf8Tier::TableDfa | Utf8Tier::UnrolledDfa => SimdLevel::Scalar,
            Utf8Tier::Sse2Dfa => SimdLevel::Sse2,
            Utf8Tier::Sse41Dfa => SimdLevel::Sse41,
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
        match cpu::simd_level() {
            SimdLevel::Sse41 => Utf8Tier::Sse41Dfa,
            SimdLevel::Sse2 => Utf8Tier::Sse2Dfa,
            SimdLevel::Scalar => Utf8Tier::UnrolledDfa,
        }
    }

    /// Resolve a request to the tier that will actually run: `None` picks
    /// [`best_available`](Self::best_available), an unavailable tier falls
    /// back to the best available tier below it.
    #[must_use]
    pub fn resolve(request: Option<Self>) -> Self {
        match request {
            None => Self::best_available(),
            Some(tier) if tier.is_available() => tier,
            Some(tier) => Self::best_available().min(tier),
        }
    }

    #[inline]
    pub(crate) fn run(self, state: u8, bytes: &[u8]) -> Scan {
        match self {
            Utf8Tier::TableDfa => TableDfa::run(state, bytes),
            Utf8Tier::UnrolledDfa => UnrolledDfa::run(state, bytes),
            Utf8Tier::Sse2Dfa => Sse2Dfa::run(state, bytes),
            Utf8Tier::Sse41Dfa => Sse41Dfa::run(state, bytes),
        }
    }
}

impl TryFrom<u8> for Utf8Tier {
    type Error = UnknownTier;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.code() == code)
            .ok_or(UnknownTier(code))
    }
}
