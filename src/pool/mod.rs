//! The two-asset constant-product [`Pool`] value type.
//!
//! A `Pool` is an immutable snapshot of a pair's reserves.  It is built
//! once from two token-bound amounts and never mutated: swap quotes return
//! a fresh `Pool` with the post-swap reserves.
//!
//! | Concern | Where |
//! |---------|-------|
//! | Reserve ordering | [`Pool::with_deployment`] |
//! | Address derivation | [`address`] |
//! | Mid prices | `price.rs` ([`Pool::token0_price`], [`Pool::token1_price`]) |
//! | Swap quotes | `swap.rs` ([`SwapPool`](crate::traits::SwapPool) impl) |
//! | LP share math | `liquidity.rs` ([`LiquidityPool`](crate::traits::LiquidityPool) impl) |
//!
//! # Invariant
//!
//! `reserve0` always belongs to `token0`, the token with the lower address.

pub mod address;
mod liquidity;
mod price;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

use alloy_primitives::{Address, ChainId, U512};
use tracing::debug;

use crate::config::Deployment;
use crate::domain::{Amount, Decimals, Token, TokenAmount, TokenPair};
use crate::error::PoolError;
use crate::math::full_mul;

/// An immutable reserve snapshot of a constant-product pair (`x · y = k`).
///
/// # Example
///
/// ```rust
/// use alloy_primitives::Address;
/// use cpmm_pool::domain::{Amount, Decimals, Token, TokenAmount};
/// use cpmm_pool::pool::Pool;
/// use cpmm_pool::traits::SwapPool;
///
/// let a = Token::new(1, Address::repeat_byte(1), Decimals::new(18).expect("ok"));
/// let b = Token::new(1, Address::repeat_byte(2), Decimals::new(18).expect("ok"));
///
/// let pool = Pool::new(
///     TokenAmount::new(b, Amount::from_u128(1_000)),
///     TokenAmount::new(a, Amount::from_u128(1_000)),
/// )
/// .expect("valid pool");
/// assert_eq!(pool.token0(), a);
///
/// let (out, next) = pool
///     .get_output_amount(&TokenAmount::new(a, Amount::from_u128(100)))
///     .expect("swap ok");
/// assert_eq!(out.raw(), Amount::from_u128(90));
/// assert_eq!(next.reserve0().raw(), Amount::from_u128(1_100));
/// assert_eq!(pool.reserve0().raw(), Amount::from_u128(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pair: TokenPair,
    reserve0: Amount,
    reserve1: Amount,
    address: Address,
    deployment: Deployment,
}

impl Pool {
    /// Creates a Uniswap V2 mainnet pool snapshot from two reserves.
    ///
    /// The reserves may be given in either order.
    ///
    /// # Errors
    ///
    /// See [`Pool::with_deployment`].
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self, PoolError> {
        Self::with_deployment(amount_a, amount_b, Deployment::default())
    }

    /// Creates a pool snapshot under an explicit deployment.
    ///
    /// The reserves are canonicalized so `reserve0` belongs to the token
    /// with the lower address, and the pair address is derived once.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfiguration`] if `deployment` is invalid.
    /// - [`PoolError::InvalidTokenPair`] if both amounts are the same token.
    /// - [`PoolError::ChainIdMismatch`] if the tokens are on different chains.
    pub fn with_deployment(
        amount_a: TokenAmount,
        amount_b: TokenAmount,
        deployment: Deployment,
    ) -> Result<Self, PoolError> {
        deployment.validate()?;

        let pair = TokenPair::new(amount_a.token(), amount_b.token())?;
        let (reserve0, reserve1) = if pair.first() == amount_a.token() {
            (amount_a.raw(), amount_b.raw())
        } else {
            (amount_b.raw(), amount_a.raw())
        };
        let address = address::pair_address(&deployment, &pair);

        debug!(
            %address,
            token0 = %pair.first().address(),
            token1 = %pair.second().address(),
            %reserve0,
            %reserve1,
            "pool snapshot created"
        );

        Ok(Self {
            pair,
            reserve0,
            reserve1,
            address,
            deployment,
        })
    }

    /// Derives the pair address of two tokens without building a pool.
    ///
    /// # Errors
    ///
    /// See [`address::derive_address`].
    pub fn address_of(
        deployment: &Deployment,
        token_a: &Token,
        token_b: &Token,
    ) -> Result<Address, PoolError> {
        address::derive_address(deployment, token_a, token_b)
    }

    /// Returns the pair contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the deployment this pool was built under.
    #[must_use]
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the chain both tokens live on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.pair.chain_id()
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn token0(&self) -> Token {
        self.pair.first()
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn token1(&self) -> Token {
        self.pair.second()
    }

    /// Returns the reserve of `token0`.
    #[must_use]
    pub const fn reserve0(&self) -> TokenAmount {
        TokenAmount::new(self.pair.first(), self.reserve0)
    }

    /// Returns the reserve of `token1`.
    #[must_use]
    pub const fn reserve1(&self) -> TokenAmount {
        TokenAmount::new(self.pair.second(), self.reserve1)
    }

    /// Returns `true` if `token` is `token0` or `token1`.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        self.pair.contains(token)
    }

    /// Returns the reserve held of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TokenNotInPool`] if `token` is foreign.
    pub fn reserve_of(&self, token: &Token) -> Result<TokenAmount, PoolError> {
        let (_, _, is_token0) = self.oriented(token)?;
        Ok(if is_token0 {
            self.reserve0()
        } else {
            self.reserve1()
        })
    }

    /// Returns the synthetic LP token: 18 decimals at the pair address.
    #[must_use]
    pub const fn liquidity_token(&self) -> Token {
        Token::new(self.pair.chain_id(), self.address, Decimals::MAX)
    }

    /// Returns the exact k invariant `reserve0 × reserve1`.
    #[must_use]
    pub fn k(&self) -> U512 {
        full_mul(self.reserve0.get(), self.reserve1.get())
    }

    /// Returns `(reserve of token, reserve of the other token, token is token0)`.
    fn oriented(&self, token: &Token) -> Result<(Amount, Amount, bool), PoolError> {
        if *token == self.pair.first() {
            Ok((self.reserve0, self.reserve1, true))
        } else if *token == self.pair.second() {
            Ok((self.reserve1, self.reserve0, false))
        } else {
            Err(PoolError::TokenNotInPool)
        }
    }

    /// A copy of this snapshot with new reserves.  The address is reused.
    const fn with_reserves(&self, reserve0: Amount, reserve1: Amount) -> Self {
        Self {
            pair: self.pair,
            reserve0,
            reserve1,
            address: self.address,
            deployment: self.deployment,
        }
    }
}
