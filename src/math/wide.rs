//! Full-precision multiply-then-divide over 256-bit integers.
//!
//! Products of two [`U256`] values are formed in [`U512`] so the only way
//! [`mul_div`] can fail is a zero denominator or a quotient that does not
//! fit back into 256 bits.

use alloy_primitives::ruint::UintTryFrom;
use alloy_primitives::{U256, U512};

use super::Rounding;
use crate::error::{PoolError, Result};

/// Widens a 256-bit value to 512 bits.
#[must_use]
pub fn widen(value: U256) -> U512 {
    U512::from(value)
}

/// Narrows a 512-bit value to 256 bits, or `None` if the high half is set.
#[must_use]
pub fn narrow(value: U512) -> Option<U256> {
    U256::uint_try_from(value).ok()
}

/// Exact product of two 256-bit values.
#[must_use]
pub fn full_mul(a: U256, b: U256) -> U512 {
    widen(a) * widen(b)
}

/// Computes `a * b / denominator` with the given rounding.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if the quotient exceeds `U256::MAX`.
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    div_wide(full_mul(a, b), widen(denominator), rounding)
}

/// Divides a 512-bit numerator by a 512-bit denominator and narrows.
///
/// # Errors
///
/// Same as [`mul_div`].
pub fn div_wide(numerator: U512, denominator: U512, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let mut quotient = numerator / denominator;
    if rounding.is_up() && !(numerator % denominator).is_zero() {
        quotient += U512::from(1u8);
    }
    narrow(quotient).ok_or(PoolError::Overflow("mul_div result exceeds 256 bits"))
}

/// Greatest common divisor of two 512-bit values; `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd_wide(mut a: U512, mut b: U512) -> U512 {
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
