//! Core trait abstractions implemented by [`Pool`](crate::pool::Pool).
//!
//! [`SwapPool`] quotes swaps and mid prices; [`LiquidityPool`] computes LP
//! share minting and redemption.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
