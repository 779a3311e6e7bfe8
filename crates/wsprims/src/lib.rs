//! Streaming byte primitives for WebSocket payloads.
//!
//! Two independent state machines live here:
//!
//! - [`Utf8Validator`] checks incrementally, chunk by chunk, that a text
//!   message is well-formed UTF-8 without buffering it.
//! - [`XorMasker`] applies the 4-byte frame masking key, resuming at the
//!   right key byte across any number of `process` calls.
//!
//! Each primitive has several interchangeable execution tiers (scalar and
//! 128-bit vectorized). Tiers differ only in speed: every tier yields the
//! same verdicts, automaton states and masked bytes for the same input.
//!
//! ```rust
//! use wsprims::{Utf8Validator, Verdict, XorMasker};
//!
//! let mut masker = XorMasker::from_key([0x01, 0x02, 0x03, 0x04]);
//! let mut payload = [0u8; 5];
//! masker.process(&mut payload);
//! assert_eq!(payload, [0x01, 0x02, 0x03, 0x04, 0x01]);
//!
//! let mut validator = Utf8Validator::new();
//! assert_eq!(validator.validate(&[0xE2]), Verdict::Incomplete);
//! assert_eq!(validator.validate(&[0x82, 0xAC]), Verdict::Valid);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunk_utils;
pub mod cpu;
mod error;
mod mask;
mod options;
mod utf8;

#[cfg(test)]
mod tests;

pub use chunk_utils::produce_chunks;
pub use error::{MaskerError, UnknownTier};
pub use mask::{MaskTier, XorMasker};
pub use options::{MaskerOptions, ValidatorOptions};
pub use utf8::{DfaState, Utf8Tier, Utf8Validator, Verdict};
