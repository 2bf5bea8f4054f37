//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_pool::prelude::*;
//! ```

pub use crate::config::Deployment;
pub use crate::domain::{Amount, Decimals, Price, SwapFee, Token, TokenAmount, TokenPair};
pub use crate::error::{PoolError, Result};
pub use crate::math::{CheckedArithmetic, Rounding};
pub use crate::pool::Pool;
pub use crate::traits::{LiquidityPool, SwapPool};
