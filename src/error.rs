//! Error type shared by every fallible operation.

use thiserror::Error;

/// Failure of an arithmetic, decoding or parsing operation on a [`Ratio`](crate::Ratio).
///
/// Every error is terminal for the call that produced it. No operation
/// returns a partially computed or wrapped-around value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// The reduced numerator or denominator does not fit in 128 bits.
    #[error("overflow: reduced numerator or denominator exceeds 128 bits")]
    Overflow,

    /// The result of a subtraction would be negative.
    #[error("underflow: subtraction result would be negative")]
    Underflow,

    /// The divisor (or a parsed denominator) is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A packed word carries a non-zero numerator over a zero denominator.
    #[error("invalid encoding: non-zero numerator over a zero denominator")]
    InvalidEncoding,

    /// Text is not of the form `n` or `n/d` with decimal `u128` parts.
    #[error("invalid ratio string")]
    InvalidFormat,
}

pub type Result<T> = core::result::Result<T, RatioError>;
