//! Bit-layout codec between a [`Ratio`] and its 256-bit word.
//!
//! The word holds the numerator in its high 128 bits and the denominator in
//! its low 128 bits. Systems exchanging packed ratios depend on this exact
//! layout.

use crate::error::{RatioError, Result};
use crate::reduce::reduce;
use crate::Ratio;
use crypto_bigint::{Encoding, U256};

impl Ratio {
    /// Number of bytes in the packed encoding.
    pub const BYTES: usize = 32;

    /// Pack two halves that are already known to satisfy the invariants.
    #[inline(always)]
    pub(crate) const fn pack(numer: u128, denom: u128) -> Self {
        Self { numer, denom }
    }

    /// Split the value into `(numerator, denominator)`.
    #[inline(always)]
    pub const fn unpack(&self) -> (u128, u128) {
        (self.numer, self.denom)
    }

    /// Lift an integer to the fraction `x/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::Ratio;
    ///
    /// let r = Ratio::from_integer(7);
    /// assert_eq!(r.unpack(), (7, 1));
    /// ```
    #[inline(always)]
    pub const fn from_integer(x: u128) -> Self {
        Self::pack(x, 1)
    }

    /// Integer part of the value, rounding toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::Ratio;
    ///
    /// let seven_halves = Ratio::from_integer(7) / Ratio::from_integer(2);
    /// assert_eq!(seven_halves.to_integer(), 3);
    /// ```
    #[inline]
    pub const fn to_integer(&self) -> u128 {
        if self.numer == 0 {
            return 0;
        }
        self.numer / self.denom
    }

    /// The packed word: numerator in the high half, denominator in the low half.
    ///
    /// # Examples
    ///
    /// ```
    /// use crypto_bigint::U256;
    /// use packed_ratio::Ratio;
    ///
    /// let word = Ratio::from_integer(5).to_word();
    /// assert_eq!(word, U256::from_be_hex(
    ///     "0000000000000000000000000000000500000000000000000000000000000001"
    /// ));
    /// ```
    pub fn to_word(&self) -> U256 {
        <U256 as Encoding>::from_be_bytes(self.to_be_bytes())
    }

    /// Decode a packed word.
    ///
    /// A zero numerator decodes to [`Ratio::ZERO`] whatever the denominator,
    /// including the all-zero word. Other words are reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// [`RatioError::InvalidEncoding`] if the numerator is non-zero and the
    /// denominator is zero.
    pub fn from_word(word: U256) -> Result<Self> {
        Self::from_be_bytes(Encoding::to_be_bytes(&word))
    }

    /// Big-endian bytes of the packed word.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..16].copy_from_slice(&self.numer.to_be_bytes());
        bytes[16..].copy_from_slice(&self.denom.to_be_bytes());
        bytes
    }

    /// Decode big-endian bytes of a packed word. See [`Ratio::from_word`].
    pub fn from_be_bytes(bytes: [u8; 32]) -> Result<Self> {
        let mut high = [0u8; 16];
        let mut low = [0u8; 16];
        high.copy_from_slice(&bytes[..16]);
        low.copy_from_slice(&bytes[16..]);
        Self::decode(u128::from_be_bytes(high), u128::from_be_bytes(low))
    }

    fn decode(numer: u128, denom: u128) -> Result<Self> {
        if numer == 0 {
            return Ok(Self::ZERO);
        }
        if denom == 0 {
            return Err(RatioError::InvalidEncoding);
        }
        reduce(U256::from_u128(numer), U256::from_u128(denom))
    }
}
