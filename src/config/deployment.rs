//! Deployment parameters of a constant-product pair factory.

use alloy_primitives::{address, b256, Address, B256};

use crate::domain::SwapFee;
use crate::error::PoolError;

/// Uniswap V2 factory on Ethereum mainnet.
pub const UNISWAP_V2_FACTORY: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

/// keccak-256 of the Uniswap V2 pair creation code.
pub const UNISWAP_V2_INIT_CODE_HASH: B256 =
    b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// Share of k growth minted to the protocol when the fee switch is on (1/6).
pub const UNISWAP_V2_PROTOCOL_FEE_SHARE: u64 = 6;

/// The fixed constants of one factory deployment.
///
/// Pools take a `Deployment` at construction instead of reading
/// process-wide constants, so the same code can model forks and test
/// deployments.  [`Deployment::default`] is Uniswap V2 on mainnet.
///
/// # Validation
///
/// - The factory address and init-code hash must be non-zero.
/// - The swap fee must retain a fraction in `(0, 1]`.
/// - The protocol fee share must be at least 2 (the protocol can take at
///   most half of the growth in `sqrt(k)`).
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use cpmm_pool::config::Deployment;
/// use cpmm_pool::domain::SwapFee;
///
/// let fork = Deployment::new(
///     Address::repeat_byte(0xfa),
///     B256::repeat_byte(0xc0),
///     SwapFee::from_basis_points(25).expect("valid fee"),
///     6,
/// )
/// .expect("valid deployment");
/// assert_eq!(fork.fee().retained(), 9_975);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deployment {
    factory: Address,
    init_code_hash: B256,
    fee: SwapFee,
    protocol_fee_share: u64,
}

impl Deployment {
    /// Uniswap V2 on Ethereum mainnet.
    pub const UNISWAP_V2: Self = Self {
        factory: UNISWAP_V2_FACTORY,
        init_code_hash: UNISWAP_V2_INIT_CODE_HASH,
        fee: SwapFee::UNISWAP_V2,
        protocol_fee_share: UNISWAP_V2_PROTOCOL_FEE_SHARE,
    };

    /// Creates and validates a deployment.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if any parameter is
    /// invalid.
    pub fn new(
        factory: Address,
        init_code_hash: B256,
        fee: SwapFee,
        protocol_fee_share: u64,
    ) -> Result<Self, PoolError> {
        let deployment = Self {
            factory,
            init_code_hash,
            fee,
            protocol_fee_share,
        };
        deployment.validate()?;
        Ok(deployment)
    }

    /// Validates all deployment invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.factory.is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "factory address must be non-zero",
            ));
        }
        if self.init_code_hash.is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "init code hash must be non-zero",
            ));
        }
        self.fee.validate()?;
        if self.protocol_fee_share < 2 {
            return Err(PoolError::InvalidConfiguration(
                "protocol fee share must be at least 2",
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different swap fee.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `fee` is invalid.
    pub fn with_fee(self, fee: SwapFee) -> Result<Self, PoolError> {
        fee.validate()?;
        Ok(Self { fee, ..self })
    }

    /// Returns the factory address.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Returns the pair init-code hash.
    #[must_use]
    pub const fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> SwapFee {
        self.fee
    }

    /// Returns `n` where the protocol takes `1/n` of k growth.
    #[must_use]
    pub const fn protocol_fee_share(&self) -> u64 {
        self.protocol_fee_share
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}
