//! Wide integer support for unreduced intermediates.
//!
//! Every arithmetic operator computes its unreduced numerator and denominator
//! in an integer at least twice as wide as the 128-bit halves of a
//! [`Ratio`](crate::Ratio), so no intermediate ever wraps:
//!
//! - A single product of two halves needs at most 256 bits ([`U256`]).
//! - The sum of two such products needs 257 bits ([`U512`]).
//!
//! [`WideInteger`] abstracts over both widths so the reducer is written once.
//!
//! # Example
//!
//! ```
//! use crypto_bigint::U256;
//! use packed_ratio::wide::{widening_mul, WideInteger};
//!
//! let p: U256 = widening_mul(u128::MAX, u128::MAX);
//! assert_eq!(p.bits_u32(), 256);
//! assert_eq!(U256::gcd(U256::from_u64(48), U256::from_u64(18)), U256::from_u64(6));
//! ```

use core::fmt::Debug;
use crypto_bigint::{Encoding, Zero, U256, U512};

/// Operations needed on an intermediate integer wide enough to hold the
/// unreduced result of a ratio operation.
pub trait WideInteger: Copy + Debug + PartialEq + Eq + PartialOrd + Ord + 'static {
    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Returns the number of significant bits in this value.
    fn bits_u32(&self) -> u32;

    /// Returns `true` if this value is zero.
    fn is_zero_bool(&self) -> bool;

    /// Multiply with wrapping on overflow.
    fn wrapping_mul(&self, other: &Self) -> Self;

    /// Divide, panicking on division by zero.
    fn wrapping_div(&self, other: &Self) -> Self;

    /// Remainder, panicking on division by zero.
    fn wrapping_rem(&self, other: &Self) -> Self;

    /// Lift a 128-bit half into the wide type.
    fn from_u128(n: u128) -> Self;

    /// Narrow back to 128 bits, returning `None` if any high bit is set.
    fn to_u128_checked(&self) -> Option<u128>;

    /// Greatest common divisor by the iterative Euclidean algorithm.
    #[inline]
    fn gcd(a: Self, b: Self) -> Self {
        gcd_euclid(a, b)
    }
}

macro_rules! impl_wide_integer {
    ($type:ty) => {
        impl WideInteger for $type {
            const ZERO: Self = <$type>::ZERO;
            const ONE: Self = <$type>::ONE;

            #[inline(always)]
            fn bits_u32(&self) -> u32 {
                self.bits() as u32
            }

            #[inline(always)]
            fn is_zero_bool(&self) -> bool {
                bool::from(<$type as Zero>::is_zero(self))
            }

            #[inline(always)]
            fn wrapping_mul(&self, other: &Self) -> Self {
                self.wrapping_mul(other)
            }

            #[inline(always)]
            fn wrapping_div(&self, other: &Self) -> Self {
                self.wrapping_div(other)
            }

            #[inline(always)]
            fn wrapping_rem(&self, other: &Self) -> Self {
                self.wrapping_rem(other)
            }

            #[inline(always)]
            fn from_u128(n: u128) -> Self {
                <$type>::from_u128(n)
            }

            #[inline]
            fn to_u128_checked(&self) -> Option<u128> {
                if self.bits() > 128 {
                    return None;
                }
                let bytes = Encoding::to_le_bytes(self);
                let mut low = [0u8; 16];
                low.copy_from_slice(&bytes.as_ref()[..16]);
                Some(u128::from_le_bytes(low))
            }
        }
    };
}

impl_wide_integer!(U256);
impl_wide_integer!(U512);

/// Full product of two 128-bit halves in the wide type `T`.
///
/// `T` must be at least 256 bits wide.
#[inline]
pub fn widening_mul<T: WideInteger>(a: u128, b: u128) -> T {
    T::from_u128(a).wrapping_mul(&T::from_u128(b))
}

/// Iterative Euclidean GCD: replace `(x, y)` with `(y, x mod y)` until `y` is
/// zero. Once both operands fit in 128 bits the remaining steps run on
/// native `u128`.
pub fn gcd_euclid<T: WideInteger>(mut x: T, mut y: T) -> T {
    loop {
        if let (Some(a), Some(b)) = (x.to_u128_checked(), y.to_u128_checked()) {
            return T::from_u128(gcd_u128(a, b));
        }
        if y.is_zero_bool() {
            return x;
        }
        let rem = x.wrapping_rem(&y);
        x = y;
        y = rem;
    }
}

#[inline]
pub(crate) fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}
