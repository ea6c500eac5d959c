//! Exact rational numbers packed into a single 256-bit word.
//!
//! This library provides [`Ratio`], an unsigned fraction whose numerator and
//! denominator are each capped at 128 bits. Together they encode as one
//! 256-bit word (numerator high, denominator low), so the type can be stored
//! or exchanged wherever a `uint256` slot is expected.
//!
//! # Features
//!
//! - **Exact**: no floating-point rounding, every result is in lowest terms
//! - **Wrap-free**: intermediates use 256/512-bit crypto-bigint integers
//! - **Fail-fast**: overflow, underflow and division by zero are reported as
//!   [`RatioError`], never wrapped around
//! - **Fixed layout**: [`Ratio::to_word`] / [`Ratio::from_word`] preserve the
//!   packed bit layout
//!
//! # Design Philosophy
//!
//! Every arithmetic result is reduced before it is packed, so equal values
//! share one representation (apart from zero, whose denominator is not
//! canonicalised by subtraction). Fallible forms (`try_*`, `checked_*`)
//! report errors; the operator traits panic on them, like std integers do.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use packed_ratio::Ratio;
//!
//! let third = Ratio::from_integer(1) / Ratio::from_integer(3);
//! let sixth = Ratio::from_integer(1) / Ratio::from_integer(6);
//!
//! let half = third + sixth;
//! assert_eq!(half.unpack(), (1, 2));
//! assert!(half > third);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use packed_ratio::{Ratio, RatioError};
//!
//! let big = Ratio::from_integer(1 << 127);
//! assert_eq!(big.try_mul(Ratio::from_integer(2)), Err(RatioError::Overflow));
//! assert_eq!(
//!     Ratio::from_integer(5).try_div(Ratio::ZERO),
//!     Err(RatioError::DivisionByZero)
//! );
//! assert_eq!(
//!     Ratio::ZERO.try_sub(Ratio::ONE),
//!     Err(RatioError::Underflow)
//! );
//! ```
//!
//! ## Packed Encoding
//!
//! ```
//! use packed_ratio::Ratio;
//!
//! let r: Ratio = "3/4".parse().unwrap();
//! let word = r.to_word();
//! assert_eq!(Ratio::from_word(word).unwrap(), r);
//! ```

pub mod error;
mod pack;
mod reduce;
#[cfg(feature = "serde")]
mod ser_de;
pub mod wide;

pub use crate::error::{RatioError, Result};
pub use crate::wide::WideInteger;

use crate::reduce::reduce;
use crate::wide::widening_mul;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use crypto_bigint::{U256, U512};

/// An unsigned rational number with 128-bit numerator and denominator.
///
/// # Invariants
///
/// - The denominator is never zero
/// - Any value with a zero numerator is zero; the canonical zero is `0/1`
/// - Non-zero values are always in lowest terms
///
/// # Examples
///
/// ```
/// use packed_ratio::Ratio;
///
/// let r = Ratio::from_integer(6) / Ratio::from_integer(8);
/// assert_eq!(r.numer(), 3);
/// assert_eq!(r.denom(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Ratio {
    numer: u128,
    denom: u128,
}

impl Ratio {
    // ========================================================================
    // CONSTANTS & ACCESSORS
    // ========================================================================

    /// The canonical zero, `0/1`.
    pub const ZERO: Self = Self::pack(0, 1);

    /// One, `1/1`.
    pub const ONE: Self = Self::pack(1, 1);

    /// The numerator.
    #[inline(always)]
    pub const fn numer(&self) -> u128 {
        self.numer
    }

    /// The denominator.
    #[inline(always)]
    pub const fn denom(&self) -> u128 {
        self.denom
    }

    /// Check if the ratio is zero, whatever its stored denominator.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Check if the ratio represents an integer.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.numer == 0 || self.denom == 1
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two ratios.
    ///
    /// A zero operand returns the other one unchanged.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] if the reduced sum does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::Ratio;
    ///
    /// let a = Ratio::from_integer(1) / Ratio::from_integer(2);
    /// let b = Ratio::from_integer(1) / Ratio::from_integer(3);
    /// assert_eq!(a.try_add(b).unwrap().unpack(), (5, 6));
    /// ```
    pub fn try_add(self, other: Self) -> Result<Self> {
        if self.is_zero() {
            return Ok(other);
        }
        if other.is_zero() {
            return Ok(self);
        }

        // The sum of two 256-bit products needs one more bit.
        let ad: U512 = widening_mul(self.numer, other.denom);
        let bc: U512 = widening_mul(other.numer, self.denom);
        let bd: U512 = widening_mul(self.denom, other.denom);

        reduce(ad.wrapping_add(&bc), bd)
    }

    /// Subtract `other` from `self`.
    ///
    /// A zero subtrahend returns `self` unchanged. Subtracting a value from
    /// itself yields zero.
    ///
    /// # Errors
    ///
    /// - [`RatioError::Underflow`] if `other > self`, which includes a zero
    ///   minuend with a non-zero subtrahend.
    /// - [`RatioError::Overflow`] if the reduced difference does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::{Ratio, RatioError};
    ///
    /// let three_quarters = Ratio::from_integer(3) / Ratio::from_integer(4);
    /// let quarter = Ratio::from_integer(1) / Ratio::from_integer(4);
    /// assert_eq!(three_quarters.try_sub(quarter).unwrap().unpack(), (1, 2));
    /// assert_eq!(quarter.try_sub(three_quarters), Err(RatioError::Underflow));
    /// ```
    pub fn try_sub(self, other: Self) -> Result<Self> {
        if other.is_zero() {
            return Ok(self);
        }
        if self.is_zero() {
            return Err(RatioError::Underflow);
        }

        let ad: U256 = widening_mul(self.numer, other.denom);
        let bc: U256 = widening_mul(other.numer, self.denom);
        if ad < bc {
            return Err(RatioError::Underflow);
        }
        let bd: U256 = widening_mul(self.denom, other.denom);

        reduce(ad.wrapping_sub(&bc), bd)
    }

    /// Multiply two ratios.
    ///
    /// A zero operand yields [`Ratio::ZERO`].
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] if the reduced product does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::Ratio;
    ///
    /// let a = Ratio::from_integer(2) / Ratio::from_integer(3);
    /// let b = Ratio::from_integer(3) / Ratio::from_integer(4);
    /// assert_eq!(a.try_mul(b).unwrap().unpack(), (1, 2));
    /// ```
    pub fn try_mul(self, other: Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }

        let ac: U256 = widening_mul(self.numer, other.numer);
        let bd: U256 = widening_mul(self.denom, other.denom);

        reduce(ac, bd)
    }

    /// Divide `self` by `other`.
    ///
    /// A zero dividend yields [`Ratio::ZERO`].
    ///
    /// # Errors
    ///
    /// - [`RatioError::DivisionByZero`] if `other` is zero.
    /// - [`RatioError::Overflow`] if the reduced quotient does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_ratio::Ratio;
    ///
    /// let r = Ratio::from_integer(1).try_div(Ratio::from_integer(3)).unwrap();
    /// assert_eq!(r.unpack(), (1, 3));
    /// ```
    pub fn try_div(self, other: Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }

        let ad: U256 = widening_mul(self.numer, other.denom);
        let bc: U256 = widening_mul(self.denom, other.numer);

        reduce(ad, bc)
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.try_add(other).ok()
    }

    /// Checked subtraction. Returns `None` on underflow or overflow.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.try_sub(other).ok()
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.try_mul(other).ok()
    }

    /// Checked division. Returns `None` on division by zero or overflow.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.try_div(other).ok()
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Three-way comparison by cross-multiplication: `a/b` vs `c/d` compares
    /// `a*d` with `c*b`.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        let ad: U256 = widening_mul(self.numer, other.denom);
        let cb: U256 = widening_mul(other.numer, self.denom);
        ad.cmp(&cb)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $try:ident, $verb:literal) => {
        impl $trait for Ratio {
            type Output = Self;
            #[inline]
            fn $method(self, other: Self) -> Self {
                match self.$try(other) {
                    Ok(result) => result,
                    Err(err) => panic!(concat!("attempt to ", $verb, " ratios: {}"), err),
                }
            }
        }

        impl $trait for &Ratio {
            type Output = Ratio;
            #[inline]
            fn $method(self, other: Self) -> Ratio {
                $trait::$method(*self, *other)
            }
        }

        impl $assign_trait for Ratio {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                *self = $trait::$method(*self, other);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, try_add, "add");
impl_binary_op!(Sub, sub, SubAssign, sub_assign, try_sub, "subtract");
impl_binary_op!(Mul, mul, MulAssign, mul_assign, try_mul, "multiply");
impl_binary_op!(Div, div, DivAssign, div_assign, try_div, "divide");

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Ratio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Zeros may carry any denominator; everything else is reduced.
        if self.is_zero() {
            Self::ZERO.unpack().hash(state);
        } else {
            self.unpack().hash(state);
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u128> for Ratio {
    fn from(x: u128) -> Self {
        Self::from_integer(x)
    }
}

impl From<u64> for Ratio {
    fn from(x: u64) -> Self {
        Self::from_integer(u128::from(x))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Ratio {
    type Err = RatioError;

    /// Parse `n` or `n/d` with unsigned decimal parts, reducing the result.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (numer.trim(), denom.trim()),
            None => (s, "1"),
        };

        let numer = parse_decimal(numer)?;
        let denom = parse_decimal(denom)?;
        if denom == 0 {
            return Err(RatioError::DivisionByZero);
        }
        if numer == 0 {
            return Ok(Self::ZERO);
        }

        reduce(U256::from_u128(numer), U256::from_u128(denom))
    }
}

/// Plain decimal digits only; `u128::from_str` alone would also take a `+` sign.
fn parse_decimal(part: &str) -> Result<u128> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RatioError::InvalidFormat);
    }
    part.parse().map_err(|_| RatioError::InvalidFormat)
}
