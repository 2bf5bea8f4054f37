//! Unified error type for the pool model.
//!
//! Every fallible operation in the crate returns [`PoolError`].  All
//! failures are immediate validation failures: pools are immutable, so an
//! error never leaves partially updated state behind.

use alloy_primitives::ChainId;
use thiserror::Error;

/// Errors produced by pool construction, quoting and liquidity math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The two tokens supplied are the same token.
    #[error("invalid token pair: {0}")]
    InvalidTokenPair(&'static str),

    /// The tokens belong to different chains.
    #[error("chain id mismatch: {left} != {right}")]
    ChainIdMismatch {
        /// Chain of the left-hand token.
        left: ChainId,
        /// Chain of the right-hand token.
        right: ChainId,
    },

    /// A referenced token is neither of the pool's two tokens.
    #[error("token is not part of the pool")]
    TokenNotInPool,

    /// A supplied amount is zero or otherwise out of domain.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The operation would drain a reserve, or a reserve is zero.
    #[error("insufficient reserves")]
    InsufficientReserves,

    /// An exact-in swap is too small to produce any output.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// Liquidity math rounds down to zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// An amount is not denominated in the pool's liquidity token.
    #[error("amount is not denominated in the pool liquidity token")]
    InvalidLiquidityToken,

    /// An argument combination is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Token decimals are out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A deployment or fee parameter is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked arithmetic underflowed.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T, E = PoolError> = core::result::Result<T, E>;
