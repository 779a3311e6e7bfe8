use thiserror::Error;

/// Errors raised while constructing an [`XorMasker`](crate::XorMasker).
///
/// Invalid UTF-8 is not an error: it is reported as
/// [`Verdict::Invalid`](crate::Verdict::Invalid).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskerError {
    /// The masking key was not exactly 4 bytes long.
    #[error("masking key must be exactly 4 bytes, got {len}")]
    InvalidKey {
        /// Length of the rejected key.
        len: usize,
    },
}

/// A wire code that names no execution tier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown tier code {0}")]
pub struct UnknownTier(pub u8);
