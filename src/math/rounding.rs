//! Rounding direction and rounded integer division.
//!
//! [`div_round`] is the low-level building block for every division in the
//! crate.  The convention is to round against the trader:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Required swap input | [`Rounding::Up`] |
//! | Minted / redeemed liquidity | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use cpmm_pool::math::{div_round, Rounding};
//!
//! let ten = U256::from(10u8);
//! let three = U256::from(3u8);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Up), None);
//! ```

use alloy_primitives::U256;

/// Rounding direction for division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative operands).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

/// Divides `numerator` by `denominator` in the given direction.
///
/// Returns [`None`] if `denominator` is zero.  Ceiling division is computed
/// as `floor + (remainder != 0)`, so it cannot overflow.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            if (numerator % denominator).is_zero() {
                Some(quotient)
            } else {
                // quotient < U256::MAX whenever there is a remainder
                Some(quotient + U256::from(1u8))
            }
        }
    }
}
