//! Swap fee expressed as an exact retained fraction.

use core::fmt;

use alloy_primitives::U256;

use crate::error::PoolError;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// The fraction of every swap input that is priced by the curve.
///
/// A `SwapFee` of `997/1000` means 99.7% of the input is traded and 0.3%
/// stays in the pool as fee revenue.  The fee is applied by scaling: the
/// input is multiplied by `retained` and the input-side reserve by `scale`.
///
/// # Examples
///
/// ```
/// use cpmm_pool::domain::SwapFee;
///
/// let fee = SwapFee::from_basis_points(30).expect("valid");
/// assert_eq!(fee.retained(), 9_970);
/// assert_eq!(fee.scale(), 10_000);
/// assert_eq!(SwapFee::UNISWAP_V2.retained(), 997);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapFee {
    retained: u32,
    scale: u32,
}

impl SwapFee {
    /// 0.30% fee as `997 / 1000`.
    pub const UNISWAP_V2: Self = Self {
        retained: 997,
        scale: 1_000,
    };

    /// No fee.
    pub const NONE: Self = Self {
        retained: 1,
        scale: 1,
    };

    /// Creates a fee retaining `retained / scale` of every input.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] unless
    /// `0 < retained <= scale`.
    pub const fn new(retained: u32, scale: u32) -> Result<Self, PoolError> {
        let fee = Self { retained, scale };
        match fee.validate() {
            Ok(()) => Ok(fee),
            Err(e) => Err(e),
        }
    }

    /// Creates a fee from basis points, e.g. `30` for 0.30%.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `bps >= 10_000`
    /// (a 100% fee makes every swap impossible).
    pub const fn from_basis_points(bps: u16) -> Result<Self, PoolError> {
        let bps = bps as u32;
        if bps >= BPS_DENOMINATOR {
            return Err(PoolError::InvalidConfiguration(
                "fee must be below 10000 basis points",
            ));
        }
        Self::new(BPS_DENOMINATOR - bps, BPS_DENOMINATOR)
    }

    /// Checks `0 < retained <= scale`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on violation.
    pub const fn validate(&self) -> Result<(), PoolError> {
        if self.scale == 0 {
            return Err(PoolError::InvalidConfiguration("fee scale must be non-zero"));
        }
        if self.retained == 0 {
            return Err(PoolError::InvalidConfiguration(
                "fee must retain part of the input",
            ));
        }
        if self.retained > self.scale {
            return Err(PoolError::InvalidConfiguration(
                "retained fraction cannot exceed one",
            ));
        }
        Ok(())
    }

    /// Returns the retained numerator.
    #[must_use]
    pub const fn retained(&self) -> u32 {
        self.retained
    }

    /// Returns the scale (denominator).
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.retained == self.scale
    }

    pub(crate) fn retained_u256(&self) -> U256 {
        U256::from(self.retained)
    }

    pub(crate) fn scale_u256(&self) -> U256 {
        U256::from(self.scale)
    }
}

impl Default for SwapFee {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for SwapFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} retained", self.retained, self.scale)
    }
}
