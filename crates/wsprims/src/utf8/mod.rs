//! Incremental UTF-8 validation.

mod dfa;
mod scalar;
mod sse;
mod tier;


pub use tier::Utf8Tier;

use crate::ValidatorOptions;

/// State of the validation automaton.
///
/// `Accept` is both the initial state and the resting state on a code point
/// boundary. `Reject` is absorbing. Every other state expects more
/// continuation bytes; the variant names the range the next byte must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DfaState {
    /// On a code point boundary.
    Accept = 0,
    /// Malformed input was seen.
    Reject = 1,
    /// One byte in `80..=BF` left.
    NeedOne = 2,
    /// Two bytes left, next in `80..=BF`.
    NeedTwo = 3,
    /// Two bytes left after `E0`, next in `A0..=BF` (no overlongs).
    NeedTwoAfterE0 = 4,
    /// Two bytes left after `ED`, next in `80..=9F` (no surrogates).
    NeedTwoAfterEd = 5,
    /// Three bytes left after `F0`, next in `90..=BF` (no overlongs).
    NeedThreeAfterF0 = 6,
    /// Three bytes left, next in `80..=BF`.
    NeedThree = 7,
    /// Three bytes left after `F4`, next in `80..=8F` (at most U+10FFFF).
    NeedThreeAfterF4 = 8,
}

impl DfaState {
    /// Every state, ordered by its numeric value.
    pub const ALL: [DfaState; 9] = [
        DfaState::Accept,
        DfaState::Reject,
        DfaState::NeedOne,
        DfaState::NeedTwo,
        DfaState::NeedTwoAfterE0,
        DfaState::NeedTwoAfterEd,
        DfaState::NeedThreeAfterF0,
        DfaState::NeedThree,
        DfaState::NeedThreeAfterF4,
    ];

    fn from_raw(raw: u8) -> Self {
        Self::ALL
            .get(usize::from(raw))
            .copied()
            .unwrap_or(DfaState::Reject)
    }
}

/// Result of one [`Utf8Validator::validate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Everything so far is valid and ends on a code point boundary.
    Valid,
    /// Everything so far is valid, but the last code point needs more bytes.
    Incomplete,
    /// The input is not UTF-8.
    Invalid {
        /// Index of the offending byte within this call's input.
        offset: usize,
        /// Index of the offending byte since the last reset.
        total: usize,
    },
}

impl Verdict {
    /// `true` unless the input was rejected.
    ///
    /// This includes [`Verdict::Incomplete`]: a message that may still turn
    /// out well-formed. Use [`ends_on_codepoint`](Self::ends_on_codepoint)
    /// to ask for [`Verdict::Valid`] only.
    ///
    /// ```rust
    /// use wsprims::Verdict;
    ///
    /// assert!(Verdict::Incomplete.is_valid());
    /// assert!(!Verdict::Incomplete.ends_on_codepoint());
    /// ```
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !self.is_invalid()
    }

    /// `true` if the input was rejected.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Verdict::Invalid { .. })
    }

    /// `true` if the input is valid and ends on a code point boundary.
    #[must_use]
    pub const fn ends_on_codepoint(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Streaming UTF-8 validator for one message.
///
/// Feed the message in arrival order; chunk boundaries may fall anywhere,
/// including inside a multi-byte sequence. Only the automaton state is
/// carried between calls, the input is never buffered.
///
/// ```rust
/// use wsprims::{Utf8Validator, Verdict};
///
/// let mut validator = Utf8Validator::new();
/// assert_eq!(validator.validate(b"caf\xC3"), Verdict::Incomplete);
/// assert_eq!(validator.validate(b"\xA9"), Verdict::Valid);
/// assert_eq!(
///     validator.validate(b"ok\xFF"),
///     Verdict::Invalid { offset: 2, total: 7 }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Utf8Validator {
    state: u8,
    current_index: usize,
    total_index: usize,
    tier: Utf8Tier,
}

impl Default for Utf8Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Validator {
    /// Create a validator in the accept state using the fastest available
    /// tier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ValidatorOptions::default())
    }

    /// Create a validator with explicit options.
    #[must_use]
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            state: dfa::ACCEPT,
            current_index: 0,
            total_index: 0,
            tier: Utf8Tier::resolve(options.tier),
        }
    }

    /// Return to the accept state and clear both counters. The tier is kept.
    pub fn reset(&mut self) {
        self.state = dfa::ACCEPT;
        self.current_index = 0;
        self.total_index = 0;
    }

    /// Active execution tier.
    #[must_use]
    pub fn tier(&self) -> Utf8Tier {
        self.tier
    }

    /// Select an execution tier; `None` selects the fastest available.
    ///
    /// Requests the CPU cannot honor are clamped to the best tier below
    /// them. Returns the tier actually selected.
    pub fn set_tier(&mut self, tier: Option<Utf8Tier>) -> Utf8Tier {
        self.tier = Utf8Tier::resolve(tier);
        self.tier
    }

    /// Current automaton state.
    #[must_use]
    pub fn state(&self) -> DfaState {
        DfaState::from_raw(self.state)
    }

    /// Whether malformed input has been seen since the last reset.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.state == dfa::REJECT
    }

    /// Bytes examined by the last [`validate`](Self::validate) call, or the
    /// offset of the offending byte if it rejected.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Bytes examined since the last reset, or the cumulative offset of the
    /// offending byte once rejected.
    #[must_use]
    pub fn total_index(&self) -> usize {
        self.total_index
    }

    /// Validate the next chunk of the message.
    ///
    /// Processing stops at the first offending byte. Once rejected, the
    /// validator reports `Invalid` at offset 0 for every further call until
    /// [`reset`](Self::reset).
    pub fn validate(&mut self, bytes: &[u8]) -> Verdict {
        if self.state == dfa::REJECT {
            self.current_index = 0;
            return self.invalid();
        }

        let scan = self.tier.run(self.state, bytes);
        self.state = scan.state;
        self.current_index = scan.stop;
        self.total_index += scan.stop;

        match scan.state {
            dfa::ACCEPT => Verdict::Valid,
            dfa::REJECT => self.invalid(),
            _ => Verdict::Incomplete,
        }
    }

    /// Validate the final chunk of the message.
    ///
    /// Like [`validate`](Self::validate), but a message that stops inside a
    /// code point is rejected at its end offset, and the validator moves to
    /// the reject state.
    pub fn validate_complete(&mut self, bytes: &[u8]) -> Verdict {
        match self.validate(bytes) {
            Verdict::Incomplete => {
                self.state = dfa::REJECT;
                self.invalid()
            }
            verdict => verdict,
        }
    }

    fn invalid(&self) -> Verdict {
        Verdict::Invalid {
            offset: self.current_index,
            total: self.total_index,
        }
    }
}
