use crate::{MaskTier, Utf8Tier};

/// Configuration for a [`Utf8Validator`](crate::Utf8Validator).
///
/// # Examples
///
/// ```rust
/// use wsprims::{Utf8Tier, Utf8Validator, ValidatorOptions};
///
/// let validator = Utf8Validator::with_options(ValidatorOptions {
///     tier: Some(Utf8Tier::TableDfa),
/// });
/// assert_eq!(validator.tier(), Utf8Tier::TableDfa);
/// ```
///
/// # Default
///
/// Automatic tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorOptions {
    /// Requested execution tier.
    ///
    /// `None` selects the fastest tier the running CPU supports. A tier the
    /// CPU cannot run is clamped to the best supported tier below it.
    ///
    /// # Default
    ///
    /// `None`
    pub tier: Option<Utf8Tier>,
}

/// Configuration for an [`XorMasker`](crate::XorMasker).
///
/// # Default
///
/// Automatic tier selection, with a vectorization threshold of 128 bytes
/// for [`XorMasker::for_payload`](crate::XorMasker::for_payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskerOptions {
    /// Requested execution tier; `None` selects the fastest available.
    ///
    /// # Default
    ///
    /// `None`
    pub tier: Option<MaskTier>,

    /// Payload length from which the length-aware factory prefers a
    /// vectorized tier. Shorter payloads do not amortize the mask setup and
    /// use [`MaskTier::Simple`].
    ///
    /// # Default
    ///
    /// `128`
    pub simd_threshold: usize,
}

impl MaskerOptions {
    /// Default [`simd_threshold`](Self::simd_threshold).
    pub const DEFAULT_SIMD_THRESHOLD: usize = 128;
}

impl Default for MaskerOptions {
    fn default() -> Self {
        Self {
            tier: None,
            simd_threshold: Self::DEFAULT_SIMD_THRESHOLD,
        }
    }
}
