//! Token identity type.

use core::hash::{Hash, Hasher};

use alloy_primitives::{Address, ChainId};

use super::Decimals;
use crate::error::PoolError;

/// The identity of an ERC-20 style token on a given chain.
///
/// Identity is `(chain_id, address)`: two `Token`s with the same chain and
/// address are equal even if their decimals disagree.  The total order used
/// to canonicalize pairs is [`sorts_before`](Self::sorts_before).
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use cpmm_pool::domain::{Decimals, Token};
///
/// let usdc = Token::new(1, Address::repeat_byte(0x01), Decimals::new(6).expect("valid"));
/// let weth = Token::new(1, Address::repeat_byte(0x02), Decimals::new(18).expect("valid"));
/// assert_eq!(usdc.sorts_before(&weth), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, Eq)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(chain_id: ChainId, address: Address, decimals: Decimals) -> Self {
        Self {
            chain_id,
            address,
            decimals,
        }
    }

    /// Returns the chain the token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the token contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if `self` precedes `other` in canonical pair order.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ChainIdMismatch`] if the tokens are on different chains.
    /// - [`PoolError::InvalidTokenPair`] if both tokens share an address.
    pub fn sorts_before(&self, other: &Self) -> Result<bool, PoolError> {
        if self.chain_id != other.chain_id {
            return Err(PoolError::ChainIdMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(PoolError::InvalidTokenPair("tokens must have distinct addresses"));
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}
