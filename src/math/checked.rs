//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations of [`Amount`] into [`Result`]s carrying a specific
//! [`PoolError`] variant, so pool code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use cpmm_pool::domain::Amount;
//! use cpmm_pool::math::{CheckedArithmetic, Rounding};
//!
//! let a = Amount::from_u128(100);
//! let b = Amount::from_u128(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::from_u128(300)));
//! assert!(a.safe_sub(&b).is_err());
//! ```

use super::Rounding;
use crate::domain::Amount;
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// - No panics: every error condition produces `Err`.
/// - No saturation: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_mul(other)
            .ok_or(PoolError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PoolError> {
        self.checked_div(other, rounding)
            .ok_or(PoolError::DivisionByZero)
    }
}
