//! Liquidity share accounting seam.
//!
//! [`LiquidityPool`] answers the two questions a liquidity provider asks of
//! a reserve snapshot: how many shares a deposit mints, and what a number
//! of shares redeems for.  Both answers round down, in favour of the pool.

use alloy_primitives::U256;

use crate::domain::{Token, TokenAmount};
use crate::error::PoolError;

/// LP-share minting and redemption math over a reserve snapshot.
pub trait LiquidityPool {
    /// Returns the liquidity token amount minted for a deposit.
    ///
    /// `total_supply` is the outstanding liquidity-token supply; the two
    /// deposit amounts may be given in either token order.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidLiquidityToken`] if `total_supply` is not the
    ///   pool's liquidity token.
    /// - [`PoolError::TokenNotInPool`] if the deposits are not the pool's
    ///   two tokens.
    /// - [`PoolError::InsufficientLiquidityMinted`] if the result is zero.
    fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount, PoolError>;

    /// Returns the amount of `token` that `liquidity` shares redeem for.
    ///
    /// With `fee_on`, the outstanding supply is first inflated by the
    /// protocol's share of the growth in `sqrt(k)` since `k_last`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TokenNotInPool`] if `token` is foreign.
    /// - [`PoolError::InvalidLiquidityToken`] if either amount is not the
    ///   pool's liquidity token.
    /// - [`PoolError::InvalidAmount`] if `liquidity > total_supply` or the
    ///   supply is zero.
    /// - [`PoolError::InvalidArgument`] if `fee_on` is set without `k_last`.
    fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<U256>,
    ) -> Result<TokenAmount, PoolError>;
}
