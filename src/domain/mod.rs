//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the value types that model the swap-pool domain:
//! addresses, amounts, liquidity shares, prices, paths, timestamps, and
//! operation outcomes. All types are newtypes with validated constructors
//! where an invariant exists to enforce.

mod address;
mod amount;
mod deposit_result;
mod liquidity;
mod price;
mod rounding;
mod swap_path;
mod swap_result;
mod timestamp;
mod token_pair;
mod withdrawal_result;

pub use address::Address;
pub use amount::Amount;
pub use deposit_result::DepositResult;
pub use liquidity::Liquidity;
pub use price::Price;
pub use rounding::Rounding;
pub use swap_path::SwapPath;
pub use swap_result::SwapResult;
pub use timestamp::Timestamp;
pub use token_pair::TokenPair;
pub use withdrawal_result::WithdrawalResult;
