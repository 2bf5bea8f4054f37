//! Mid prices implied by the reserve ratio.

use super::Pool;
use crate::domain::Price;
use crate::error::PoolError;

impl Pool {
    /// Returns the price of `token0` in `token1`: `reserve1 / reserve0`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientReserves`] if either reserve is zero.
    pub fn token0_price(&self) -> Result<Price, PoolError> {
        self.ensure_priced()?;
        Price::new(
            self.token0(),
            self.token1(),
            self.reserve0.get(),
            self.reserve1.get(),
        )
    }

    /// Returns the price of `token1` in `token0`: `reserve0 / reserve1`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientReserves`] if either reserve is zero.
    pub fn token1_price(&self) -> Result<Price, PoolError> {
        self.ensure_priced()?;
        Price::new(
            self.token1(),
            self.token0(),
            self.reserve1.get(),
            self.reserve0.get(),
        )
    }

    fn ensure_priced(&self) -> Result<(), PoolError> {
        if self.reserve0.is_zero() || self.reserve1.is_zero() {
            return Err(PoolError::InsufficientReserves);
        }
        Ok(())
    }
}
