//! Deterministic pair address derivation.
//!
//! The pair contract is deployed by the factory with `CREATE2`, salted by
//! the keccak-256 of the two token addresses packed in canonical order:
//!
//! ```text
//! salt    = keccak256(token0 ++ token1)            // 20 + 20 bytes
//! address = keccak256(0xff ++ factory ++ salt ++ init_code_hash)[12..]
//! ```

use alloy_primitives::{keccak256, Address};

use crate::config::Deployment;
use crate::domain::{Token, TokenPair};
use crate::error::PoolError;

/// Derives the pair address for two tokens under `deployment`.
///
/// The result does not depend on argument order.
///
/// # Errors
///
/// - [`PoolError::InvalidTokenPair`] if both tokens are the same.
/// - [`PoolError::ChainIdMismatch`] if the tokens are on different chains.
pub fn derive_address(
    deployment: &Deployment,
    token_a: &Token,
    token_b: &Token,
) -> Result<Address, PoolError> {
    let pair = TokenPair::new(*token_a, *token_b)?;
    Ok(pair_address(deployment, &pair))
}

/// Derives the pair address of an already canonical pair.
#[must_use]
pub fn pair_address(deployment: &Deployment, pair: &TokenPair) -> Address {
    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(pair.first().address().as_slice());
    packed[20..].copy_from_slice(pair.second().address().as_slice());
    let salt = keccak256(packed);
    deployment
        .factory()
        .create2(salt, deployment.init_code_hash())
}
