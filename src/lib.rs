//! # cpmm-pool
//!
//! Reserve-snapshot math for a two-asset constant-product pool in the
//! Uniswap V2 style: deterministic pair addresses, mid prices, exact-in and
//! exact-out swap quotes, and liquidity-token minting and redemption.
//!
//! Every value is immutable.  A swap quote returns the pool snapshot that
//! would exist after the swap instead of mutating the receiver, so snapshots
//! can be shared across threads without locking.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for [`Deployment`](config::Deployment) and [`SwapFee`](domain::SwapFee) |
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::address;
//! use cpmm_pool::prelude::*;
//!
//! let usdc = Token::new(
//!     1,
//!     address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
//!     Decimals::new(6).expect("valid decimals"),
//! );
//! let weth = Token::new(
//!     1,
//!     address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
//!     Decimals::new(18).expect("valid decimals"),
//! );
//!
//! let pool = Pool::new(
//!     TokenAmount::new(usdc, Amount::from_u128(2_000_000_000_000)),
//!     TokenAmount::new(weth, Amount::from_u128(1_000_000_000_000_000_000_000)),
//! )
//! .expect("distinct tokens");
//! assert_eq!(pool.address(), address!("0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"));
//!
//! // sell 1 WETH
//! let one_weth = TokenAmount::new(weth, Amount::from_u128(1_000_000_000_000_000_000));
//! let (usdc_out, after) = pool.get_output_amount(&one_weth).expect("quotable");
//! assert!(usdc_out.raw() < pool.reserve_of(&usdc).expect("pool token").raw());
//! assert!(after.k() >= pool.k());
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Token`](domain::Token), [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`SwapFee`](domain::SwapFee) |
//! | [`pool`]   | The [`Pool`](pool::Pool) snapshot and pair address derivation |
//! | [`traits`] | [`SwapPool`](traits::SwapPool) and [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`Deployment`](config::Deployment): factory, init-code hash, fee, protocol fee share |
//! | [`math`]   | Checked arithmetic, rounding, 512-bit `mul_div`, integer square root |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;

pub use alloy_primitives::{Address, U256};
