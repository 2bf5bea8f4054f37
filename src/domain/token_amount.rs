//! An amount bound to the token it is denominated in.

use core::fmt;

use super::{Amount, Token};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// A raw [`Amount`] of a specific [`Token`].
///
/// Reserves, swap inputs and outputs, and liquidity-token supplies are all
/// `TokenAmount`s so the pool can check that each value is denominated in
/// the token it expects.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use cpmm_pool::domain::{Amount, Decimals, Token, TokenAmount};
///
/// let usdc = Token::new(1, Address::repeat_byte(1), Decimals::new(6).expect("valid"));
/// let amt = TokenAmount::new(usdc, Amount::from_u128(1_500_000));
/// assert_eq!(amt.to_string(), "1.500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    token: Token,
    raw: Amount,
}

impl TokenAmount {
    /// Binds `raw` to `token`.
    #[must_use]
    pub const fn new(token: Token, raw: Amount) -> Self {
        Self { token, raw }
    }

    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn raw(&self) -> Amount {
        self.raw
    }

    /// Returns `true` if the raw amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Adds another amount of the same token.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidArgument`] if the tokens differ.
    /// - [`PoolError::Overflow`] on overflow.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.ensure_same_token(other)?;
        Ok(Self::new(self.token, self.raw.safe_add(&other.raw)?))
    }

    /// Subtracts another amount of the same token.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidArgument`] if the tokens differ.
    /// - [`PoolError::Underflow`] if `other` exceeds `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.ensure_same_token(other)?;
        Ok(Self::new(self.token, self.raw.safe_sub(&other.raw)?))
    }

    fn ensure_same_token(&self, other: &Self) -> Result<(), PoolError> {
        if self.token != other.token {
            return Err(PoolError::InvalidArgument(
                "amounts are denominated in different tokens",
            ));
        }
        Ok(())
    }
}

/// Renders the exact decimal value, e.g. `1.500000` for 1.5 USDC.
impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = usize::from(self.token.decimals().get());
        if decimals == 0 {
            return write!(f, "{}", self.raw);
        }
        let unit = self.token.decimals().unit();
        let whole = self.raw.get() / unit;
        let fraction = (self.raw.get() % unit).to_string();
        write!(f, "{whole}.{fraction:0>decimals$}")
    }
}
