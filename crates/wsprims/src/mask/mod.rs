//! Incremental WebSocket payload masking.

mod scalar;
mod sse2;
mod tier;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use tier::MaskTier;

use crate::{MaskerError, MaskerOptions};

/// Cyclic XOR with a 4-byte masking key.
///
/// The masker remembers how many bytes it has processed, so a frame payload
/// may be (un)masked in as many pieces as the network delivers. Masking is
/// its own inverse.
///
/// A masker without a key (see [`XorMasker::null`]) leaves bytes untouched
/// and only advances its position; it serves unmasked frames through the
/// same interface.
///
/// ```rust
/// use wsprims::XorMasker;
///
/// let mut masker = XorMasker::new(&[0x37, 0xfa, 0x21, 0x3d]).unwrap();
/// let mut payload = *b"Hello";
/// masker.process(&mut payload[..3]);
/// masker.process(&mut payload[3..]);
/// assert_eq!(payload, [0x7f, 0x9f, 0x4d, 0x51, 0x58]);
/// assert_eq!(masker.pointer(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct XorMasker {
    key: Option<[u8; 4]>,
    position: usize,
    tier: MaskTier,
}

impl XorMasker {
    /// Create a masker for `key`, which must be exactly 4 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`MaskerError::InvalidKey`] for any other key length.
    pub fn new(key: &[u8]) -> Result<Self, MaskerError> {
        let key: [u8; 4] = key
            .try_into()
            .map_err(|_| MaskerError::InvalidKey { len: key.len() })?;
        Ok(Self::from_key(key))
    }

    /// Create a masker for `key` using the fastest available tier.
    #[must_use]
    pub fn from_key(key: [u8; 4]) -> Self {
        Self::with_options(Some(key), MaskerOptions::default())
    }

    /// Create a masker that leaves bytes untouched.
    #[must_use]
    pub fn null() -> Self {
        Self::with_options(None, MaskerOptions::default())
    }

    /// Create a masker with explicit options; `None` yields a null masker.
    #[must_use]
    pub fn with_options(key: Option<[u8; 4]>, options: MaskerOptions) -> Self {
        Self {
            key,
            position: 0,
            tier: MaskTier::resolve(options.tier),
        }
    }

    /// Create a masker suited to a payload of about `length` bytes.
    ///
    /// Without a key this is a null masker. Short or unknown payloads use
    /// [`MaskTier::Simple`]; payloads of at least
    /// [`MaskerOptions::DEFAULT_SIMD_THRESHOLD`] bytes use the fastest tier.
    #[must_use]
    pub fn for_payload(key: Option<[u8; 4]>, length: Option<usize>) -> Self {
        Self::for_payload_with(key, length, MaskerOptions::default())
    }

    /// Like [`for_payload`](Self::for_payload) with a custom threshold.
    /// An explicit `options.tier` takes precedence over the length hint.
    #[must_use]
    pub fn for_payload_with(
        key: Option<[u8; 4]>,
        length: Option<usize>,
        options: MaskerOptions,
    ) -> Self {
        let tier = options.tier.or(match length {
            Some(length) if length >= options.simd_threshold => None,
            _ => Some(MaskTier::Simple),
        });
        Self::with_options(key, MaskerOptions { tier, ..options })
    }

    /// The masking key, or `None` for a null masker.
    #[must_use]
    pub fn key(&self) -> Option<[u8; 4]> {
        self.key
    }

    /// Whether this masker leaves bytes untouched.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.key.is_none()
    }

    /// Number of bytes processed since the last reset. Only its value
    /// modulo 4 affects masking.
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.position
    }

    /// Restart at key byte 0. The key and tier are kept.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Active execution tier.
    #[must_use]
    pub fn tier(&self) -> MaskTier {
        self.tier
    }

    /// Select an execution tier; `None` selects the fastest available.
    /// Returns the tier actually selected.
    pub fn set_tier(&mut self, tier: Option<MaskTier>) -> MaskTier {
        self.tier = MaskTier::resolve(tier);
        self.tier
    }

    /// (Un)mask `buf` in place and advance the position by its length.
    pub fn process(&mut self, buf: &mut [u8]) {
        if let Some(key) = self.key {
            self.tier.apply(key, self.position, buf);
        }
        self.position = self.position.wrapping_add(buf.len());
    }

    /// (Un)mask a copy of `data` and advance the position by its length.
    #[must_use]
    pub fn process_to_vec(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        self.process(&mut out);
        out
    }
}
