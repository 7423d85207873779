//! Outcome of a liquidity deposit.

use core::fmt;

use super::{Amount, Liquidity};

/// The outcome of an `add_liquidity` call.
///
/// `amount_a` / `amount_b` are the amounts actually deposited, in the
/// caller's argument order. They never exceed the desired amounts and,
/// on a non-empty pool, preserve the pre-deposit reserve ratio exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositResult {
    amount_a: Amount,
    amount_b: Amount,
    liquidity_minted: Liquidity,
}

impl DepositResult {
    /// Creates a new `DepositResult`.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount, liquidity_minted: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            liquidity_minted,
        }
    }

    /// Returns the actual deposit of the caller's first token.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the actual deposit of the caller's second token.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the liquidity shares minted to the recipient.
    #[must_use]
    pub const fn liquidity_minted(&self) -> Liquidity {
        self.liquidity_minted
    }
}

impl fmt::Display for DepositResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepositResult(a={}, b={}, minted={})",
            self.amount_a, self.amount_b, self.liquidity_minted
        )
    }
}
