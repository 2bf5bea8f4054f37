//! Liquidity-token minting and redemption.
//!
//! # Bootstrap
//!
//! The first deposit mints `⌊√(amount0 · amount1)⌋` shares; later deposits
//! mint in proportion to the binding side:
//!
//! ```text
//! minted = min(⌊amount0 · S / reserve0⌋, ⌊amount1 · S / reserve1⌋)
//! ```
//!
//! # Protocol fee
//!
//! With the fee switch on, the protocol is owed `1/share` of the growth in
//! `√k` since `k_last`.  That debt is settled by minting to the protocol,
//! which dilutes every existing share before redemption:
//!
//! ```text
//! fee_liquidity = ⌊S · (√k − √k_last) / ((share − 1) · √k + √k_last)⌋
//! ```

use alloy_primitives::U256;
use tracing::trace;

use super::Pool;
use crate::domain::{Amount, Token, TokenAmount};
use crate::error::PoolError;
use crate::math::{div_wide, full_mul, isqrt, mul_div, narrow, widen, CheckedArithmetic, Rounding};
use crate::traits::LiquidityPool;

impl LiquidityPool for Pool {
    fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount, PoolError> {
        self.ensure_liquidity_token(total_supply)?;
        let (amount0, amount1) = self.deposit_amounts(amount_a, amount_b)?;
        let supply = total_supply.raw();

        let minted = if supply.is_zero() {
            let root = isqrt(full_mul(amount0.get(), amount1.get()));
            narrow(root).ok_or(PoolError::Overflow("geometric mean exceeds 256 bits"))?
        } else {
            if self.reserve0.is_zero() || self.reserve1.is_zero() {
                return Err(PoolError::InsufficientReserves);
            }
            let by0 = mul_div(amount0.get(), supply.get(), self.reserve0.get(), Rounding::Down)?;
            let by1 = mul_div(amount1.get(), supply.get(), self.reserve1.get(), Rounding::Down)?;
            by0.min(by1)
        };

        if minted.is_zero() {
            return Err(PoolError::InsufficientLiquidityMinted);
        }

        trace!(
            pool = %self.address,
            %amount0,
            %amount1,
            total_supply = %supply,
            %minted,
            "liquidity minted"
        );

        Ok(TokenAmount::new(self.liquidity_token(), Amount::new(minted)))
    }

    fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<U256>,
    ) -> Result<TokenAmount, PoolError> {
        let (reserve, _, _) = self.oriented(token)?;
        self.ensure_liquidity_token(total_supply)?;
        self.ensure_liquidity_token(liquidity)?;

        let supply = total_supply.raw();
        if supply.is_zero() {
            return Err(PoolError::InvalidAmount("total supply must be positive"));
        }
        if liquidity.raw() > supply {
            return Err(PoolError::InvalidAmount(
                "liquidity must not exceed total supply",
            ));
        }

        let supply = if fee_on {
            let k_last = k_last.ok_or(PoolError::InvalidArgument(
                "k_last is required when fee_on is set",
            ))?;
            self.supply_after_protocol_fee(supply, k_last)?
        } else {
            supply
        };

        let value = mul_div(
            reserve.get(),
            liquidity.raw().get(),
            supply.get(),
            Rounding::Down,
        )?;

        trace!(
            pool = %self.address,
            token = %token.address(),
            liquidity = %liquidity.raw(),
            total_supply = %supply,
            %value,
            fee_on,
            "liquidity value"
        );

        Ok(TokenAmount::new(*token, Amount::new(value)))
    }
}

impl Pool {
    fn ensure_liquidity_token(&self, amount: &TokenAmount) -> Result<(), PoolError> {
        if amount.token() != self.liquidity_token() {
            return Err(PoolError::InvalidLiquidityToken);
        }
        Ok(())
    }

    /// Orders a two-sided deposit as `(amount0, amount1)`.
    fn deposit_amounts(
        &self,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<(Amount, Amount), PoolError> {
        let (token0, token1) = (self.token0(), self.token1());
        let (a, b) = (amount_a.token(), amount_b.token());
        if a == token0 && b == token1 {
            Ok((amount_a.raw(), amount_b.raw()))
        } else if a == token1 && b == token0 {
            Ok((amount_b.raw(), amount_a.raw()))
        } else {
            Err(PoolError::TokenNotInPool)
        }
    }

    /// Total supply including the protocol's unminted fee liquidity.
    ///
    /// A zero `k_last` means the fee switch was off at the last liquidity
    /// event, so nothing is owed.
    fn supply_after_protocol_fee(&self, supply: Amount, k_last: U256) -> Result<Amount, PoolError> {
        if k_last.is_zero() {
            return Ok(supply);
        }
        let root_k = narrow(isqrt(self.k())).ok_or(PoolError::Overflow("sqrt(k) exceeds 256 bits"))?;
        let root_k_last = isqrt(k_last);
        if root_k <= root_k_last {
            return Ok(supply);
        }

        let share = self.deployment.protocol_fee_share();
        let numerator = full_mul(supply.get(), root_k - root_k_last);
        let denominator = full_mul(root_k, U256::from(share - 1))
            .checked_add(widen(root_k_last))
            .ok_or(PoolError::Overflow("protocol fee denominator overflow"))?;
        let fee_liquidity = div_wide(numerator, denominator, Rounding::Down)?;

        trace!(pool = %self.address, %fee_liquidity, "protocol fee accrued");

        supply.safe_add(&Amount::new(fee_liquidity))
    }
}
