//! Exact-in and exact-out swap quotes.
//!
//! Output amounts round down and required inputs round up, so neither
//! direction lets rounding take value out of the pool.  Intermediate
//! products are formed in 512 bits.

use alloy_primitives::U512;
use tracing::trace;

use super::Pool;
use crate::domain::{Amount, Price, SwapFee, Token, TokenAmount, TokenPair};
use crate::error::PoolError;
use crate::math::{div_wide, full_mul, widen, CheckedArithmetic, Rounding};
use crate::traits::SwapPool;

impl SwapPool for Pool {
    fn get_output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Self), PoolError> {
        let token_in = input.token();
        let (reserve_in, reserve_out, is_token0) = self.oriented(&token_in)?;
        if input.is_zero() {
            return Err(PoolError::InvalidAmount("input amount must be positive"));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientReserves);
        }

        let fee = self.deployment.fee();
        let amount_in_with_fee = full_mul(input.raw().get(), fee.retained_u256());

        // out = in·γ·R_out / (R_in·scale + in·γ)
        let numerator = amount_in_with_fee
            .checked_mul(widen(reserve_out.get()))
            .ok_or(PoolError::Overflow("swap numerator overflow"))?;
        let denominator = full_mul(reserve_in.get(), fee.scale_u256())
            .checked_add(amount_in_with_fee)
            .ok_or(PoolError::Overflow("swap denominator overflow"))?;
        let amount_out = Amount::new(div_wide(numerator, denominator, Rounding::Down)?);

        if amount_out.is_zero() {
            return Err(PoolError::InsufficientInputAmount);
        }
        if amount_out >= reserve_out {
            return Err(PoolError::InsufficientReserves);
        }

        let new_in = reserve_in.safe_add(&input.raw())?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let next = self.reoriented(is_token0, new_in, new_out);

        trace!(
            pool = %self.address,
            amount_in = %input.raw(),
            %amount_out,
            zero_for_one = is_token0,
            "exact-in quote"
        );

        let token_out = self.pair.other(&token_in)?;
        Ok((TokenAmount::new(token_out, amount_out), next))
    }

    fn get_input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Self), PoolError> {
        let token_out = output.token();
        let (reserve_out, reserve_in, out_is_token0) = self.oriented(&token_out)?;
        if output.is_zero() {
            return Err(PoolError::InvalidAmount("output amount must be positive"));
        }
        let amount_out = output.raw();
        if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
            return Err(PoolError::InsufficientReserves);
        }

        let fee = self.deployment.fee();
        // in = ⌈R_in·out·scale / ((R_out − out)·γ)⌉
        let numerator = full_mul(reserve_in.get(), amount_out.get())
            .checked_mul(widen(fee.scale_u256()))
            .ok_or(PoolError::Overflow("swap numerator overflow"))?;
        let remaining = reserve_out.safe_sub(&amount_out)?;
        let denominator: U512 = full_mul(remaining.get(), fee.retained_u256());
        let amount_in = Amount::new(div_wide(numerator, denominator, Rounding::Up)?);

        let new_in = reserve_in.safe_add(&amount_in)?;
        let next = self.reoriented(!out_is_token0, new_in, remaining);

        trace!(
            pool = %self.address,
            %amount_in,
            %amount_out,
            zero_for_one = !out_is_token0,
            "exact-out quote"
        );

        let token_in = self.pair.other(&token_out)?;
        Ok((TokenAmount::new(token_in, amount_in), next))
    }

    fn price_of(&self, token: &Token) -> Result<Price, PoolError> {
        let (_, _, is_token0) = self.oriented(token)?;
        if is_token0 {
            self.token0_price()
        } else {
            self.token1_price()
        }
    }

    fn token_pair(&self) -> &TokenPair {
        &self.pair
    }

    fn fee(&self) -> SwapFee {
        self.deployment.fee()
    }
}

impl Pool {
    /// Rebuilds the snapshot from `(reserve_in, reserve_out)`, where
    /// `in_is_token0` says which side the input reserve belongs to.
    const fn reoriented(&self, in_is_token0: bool, reserve_in: Amount, reserve_out: Amount) -> Self {
        if in_is_token0 {
            self.with_reserves(reserve_in, reserve_out)
        } else {
            self.with_reserves(reserve_out, reserve_in)
        }
    }
}
