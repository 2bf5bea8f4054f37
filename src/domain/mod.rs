//! Domain value types used throughout the pool model.
//!
//! Tokens, amounts bound to tokens, the canonical token pair, exact
//! prices and the swap fee.  All types use validated constructors to
//! enforce their invariants.

mod amount;
mod decimals;
mod price;
mod swap_fee;
mod token;
mod token_amount;
mod token_pair;

pub use amount::Amount;
pub use decimals::Decimals;
pub use price::Price;
pub use swap_fee::SwapFee;
pub use token::Token;
pub use token_amount::TokenAmount;
pub use token_pair::TokenPair;
