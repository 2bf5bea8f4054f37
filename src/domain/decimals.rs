//! Token decimal places.

use alloy_primitives::U256;

use crate::error::PoolError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of fractional decimal places of a token.
///
/// Valid range is `0..=18`.  Liquidity tokens always use
/// [`Decimals::MAX`].
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert!(Decimals::new(19).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places; the precision of every liquidity token.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, PoolError> {
        if value > MAX_DECIMALS {
            return Err(PoolError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the raw units in one whole token.
    #[must_use]
    pub fn unit(&self) -> U256 {
        U256::from(10u8).pow(U256::from(self.0))
    }
}
