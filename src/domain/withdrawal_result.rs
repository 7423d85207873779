//! Outcome of a liquidity withdrawal.

use core::fmt;

use super::Amount;

/// The outcome of a `remove_liquidity` call.
///
/// Amounts are in the caller's argument order and are the pro-rata share
/// of each reserve for the burned liquidity, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalResult {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawalResult {
    /// Creates a new `WithdrawalResult`.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Returns the withdrawn amount of the caller's first token.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the withdrawn amount of the caller's second token.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for WithdrawalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawalResult(a={}, b={})",
            self.amount_a, self.amount_b
        )
    }
}
