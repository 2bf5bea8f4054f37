//! Swap quoting seam.
//!
//! [`SwapPool`] covers everything a router needs from a pool snapshot:
//!
//! 1. **Quote exact-in** — [`SwapPool::get_output_amount`].
//! 2. **Quote exact-out** — [`SwapPool::get_input_amount`].
//! 3. **Mid price** — [`SwapPool::price_of`].
//! 4. **Inspect** — [`SwapPool::token_pair`] and [`SwapPool::fee`].
//!
//! # Immutability
//!
//! Quotes never mutate the receiver.  Each quote returns the pool snapshot
//! that would exist after the swap, so older snapshots stay valid and can
//! be shared freely across threads.
//!
//! # Fee Application
//!
//! The fee is applied by scaling the input before the curve is evaluated:
//!
//! ```text
//! amount_in_with_fee = amount_in × retained
//! amount_out = amount_in_with_fee × reserve_out / (reserve_in × scale + amount_in_with_fee)
//! ```

use crate::domain::{Price, SwapFee, Token, TokenAmount, TokenPair};
use crate::error::PoolError;

/// Immutable swap quoting over a reserve snapshot.
pub trait SwapPool: Sized {
    /// Quotes an exact-in swap.
    ///
    /// Returns the output amount (rounded down) and the post-swap pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TokenNotInPool`] if the input token is foreign.
    /// - [`PoolError::InvalidAmount`] if the input is zero.
    /// - [`PoolError::InsufficientReserves`] if a reserve is zero or the
    ///   output would drain the pool.
    /// - [`PoolError::InsufficientInputAmount`] if the output rounds to zero.
    fn get_output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Self), PoolError>;

    /// Quotes an exact-out swap.
    ///
    /// Returns the minimum input amount (rounded up) and the post-swap pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TokenNotInPool`] if the output token is foreign.
    /// - [`PoolError::InvalidAmount`] if the output is zero.
    /// - [`PoolError::InsufficientReserves`] if a reserve is zero or the
    ///   output is not strictly below the output reserve.
    fn get_input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Self), PoolError>;

    /// Returns the mid price of `token` in terms of the other pool token.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TokenNotInPool`] if `token` is foreign.
    /// - [`PoolError::InsufficientReserves`] if either reserve is zero.
    fn price_of(&self, token: &Token) -> Result<Price, PoolError>;

    /// Returns the canonically ordered token pair.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// Returns the swap fee.
    #[must_use]
    fn fee(&self) -> SwapFee;
}
