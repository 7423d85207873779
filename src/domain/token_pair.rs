//! Canonically ordered pair of distinct tokens.

use super::Address;
use crate::error::{PoolError, Result};

/// An ordered pair of distinct token addresses, canonically sorted.
///
/// The canonical ordering guarantees `token0() < token1()`, so the pair
/// `(A, B)` and the pair `(B, A)` construct the same `TokenPair`. Reserve
/// bookkeeping is keyed to this order regardless of the order a caller
/// names the tokens in.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, TokenPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.token0(), a);
/// assert_eq!(pair.token1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token0: Address,
    token1: Address,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if either address is zero or
    /// the two addresses are equal.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self> {
        if token_a.is_zero() || token_b.is_zero() {
            return Err(PoolError::InvalidToken("token address must not be zero"));
        }
        if token_a == token_b {
            return Err(PoolError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self { token0, token1 })
    }

    /// Returns the first token in canonical order (lower address).
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.token0
    }

    /// Returns the second token in canonical order (higher address).
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.token1
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns `true` if the unordered pair `{a, b}` equals this pair.
    #[must_use]
    pub fn matches(&self, a: &Address, b: &Address) -> bool {
        (self.token0 == *a && self.token1 == *b) || (self.token0 == *b && self.token1 == *a)
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Address) -> Result<Address> {
        if *token == self.token0 {
            Ok(self.token1)
        } else if *token == self.token1 {
            Ok(self.token0)
        } else {
            Err(PoolError::InvalidToken("token is not part of this pair"))
        }
    }
}
