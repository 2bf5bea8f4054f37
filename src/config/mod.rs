//! Injected deployment configuration.
//!
//! A [`Deployment`] carries the constants that differ between factory
//! deployments: the factory address and pair init-code hash used for
//! address derivation, the swap fee, and the protocol fee share.

mod deployment;

pub use deployment::{
    Deployment, UNISWAP_V2_FACTORY, UNISWAP_V2_INIT_CODE_HASH, UNISWAP_V2_PROTOCOL_FEE_SHARE,
};
