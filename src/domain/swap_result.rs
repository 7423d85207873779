//! Outcome of a swap operation.

use core::fmt;

use super::{Address, Amount};

/// The outcome of an executed swap: what went in, what came out.
///
/// The input amount is always the caller's exact `amount_in`; the output
/// amount is the constant-product quote at execution time, already
/// checked against the caller's floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    token_in: Address,
    token_out: Address,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult`.
    #[must_use]
    pub const fn new(
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
        }
    }

    /// Returns the input token address.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Returns the output token address.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }

    /// Returns the amount pulled from the swapper.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount paid out to the recipient.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns `[amount_in, amount_out]` in path order.
    #[must_use]
    pub const fn amounts(&self) -> [Amount; 2] {
        [self.amount_in, self.amount_out]
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={}, out={})",
            self.amount_in, self.amount_out
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    #[test]
    fn accessors() {
        let result = SwapResult::new(addr(1), addr(2), Amount::new(10), Amount::new(9));
        assert_eq!(result.token_in(), addr(1));
        assert_eq!(result.token_out(), addr(2));
        assert_eq!(result.amount_in(), Amount::new(10));
        assert_eq!(result.amount_out(), Amount::new(9));
    }

    #[test]
    fn amounts_in_path_order() {
        let result = SwapResult::new(addr(1), addr(2), Amount::new(10), Amount::new(9));
        assert_eq!(result.amounts(), [Amount::new(10), Amount::new(9)]);
    }

    #[test]
    fn display() {
        let result = SwapResult::new(addr(1), addr(2), Amount::new(10), Amount::new(9));
        assert_eq!(format!("{result}"), "SwapResult(in=10, out=9)");
    }
}
