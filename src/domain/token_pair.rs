//! Canonically ordered pair of distinct tokens.

use alloy_primitives::ChainId;

use super::Token;
use crate::error::PoolError;

/// An ordered pair of distinct tokens on one chain, sorted by address.
///
/// The canonical ordering guarantees `first().address() < second().address()`,
/// so `(A, B)` and `(B, A)` produce the same pair.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use cpmm_pool::domain::{Decimals, Token, TokenPair};
///
/// let a = Token::new(1, Address::repeat_byte(1), Decimals::new(6).expect("valid"));
/// let b = Token::new(1, Address::repeat_byte(2), Decimals::new(18).expect("valid"));
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Creates a new canonically ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ChainIdMismatch`] if the tokens are on different chains.
    /// - [`PoolError::InvalidTokenPair`] if both tokens have the same address.
    pub fn new(token_a: Token, token_b: Token) -> Result<Self, PoolError> {
        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self { token0, token1 })
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token0
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token1
    }

    /// Returns the chain both tokens live on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.token0.chain_id()
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TokenNotInPool`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<Token, PoolError> {
        if *token == self.token0 {
            Ok(self.token1)
        } else if *token == self.token1 {
            Ok(self.token0)
        } else {
            Err(PoolError::TokenNotInPool)
        }
    }
}
