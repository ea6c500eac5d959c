//! Normalisation of unreduced wide results into a packed [`Ratio`].

use crate::error::{RatioError, Result};
use crate::wide::WideInteger;
use crate::Ratio;

/// Reduce `numer/denom` to lowest terms and pack it.
///
/// A zero numerator skips the GCD and keeps its denominator, so the result
/// may be a non-canonical zero. If that denominator does not fit in 128 bits
/// the value is still zero, and [`Ratio::ZERO`] is returned instead.
///
/// # Errors
///
/// [`RatioError::Overflow`] if the reduced numerator or denominator exceeds
/// 128 bits.
pub(crate) fn reduce<T: WideInteger>(numer: T, denom: T) -> Result<Ratio> {
    if numer.is_zero_bool() {
        return Ok(match denom.to_u128_checked() {
            Some(denom) if denom != 0 => Ratio::pack(0, denom),
            _ => Ratio::ZERO,
        });
    }

    let g = T::gcd(numer, denom);
    let (numer, denom) = if g == T::ONE {
        (numer, denom)
    } else {
        (numer.wrapping_div(&g), denom.wrapping_div(&g))
    };

    match (numer.to_u128_checked(), denom.to_u128_checked()) {
        (Some(numer), Some(denom)) => Ok(Ratio::pack(numer, denom)),
        _ => Err(RatioError::Overflow),
    }
}
