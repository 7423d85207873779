//! Ordered swap route through the pool.

use core::fmt;

use super::Address;
use crate::error::{PoolError, Result};

/// The ordered route of a swap: input token first, output token second.
///
/// A single-pair pool only ever routes directly, so a path is exactly
/// two distinct token addresses. Whether both addresses belong to the
/// pool's pair is checked by the pool itself at call time.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, SwapPath};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let path = SwapPath::new(a, b).expect("distinct tokens");
/// assert_eq!(path.token_in(), a);
/// assert_eq!(path.token_out(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapPath {
    token_in: Address,
    token_out: Address,
}

impl SwapPath {
    /// Creates a path from an input token to an output token.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPath`] if the two addresses are equal.
    pub fn new(token_in: Address, token_out: Address) -> Result<Self> {
        if token_in == token_out {
            return Err(PoolError::InvalidPath("path tokens must be distinct"));
        }
        Ok(Self {
            token_in,
            token_out,
        })
    }

    /// Creates a path from an ordered slice of token addresses.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPath`] if the slice does not hold
    /// exactly two distinct addresses.
    pub fn from_slice(tokens: &[Address]) -> Result<Self> {
        let [token_in, token_out] = tokens else {
            return Err(PoolError::InvalidPath(
                "path must contain exactly two tokens",
            ));
        };
        Self::new(*token_in, *token_out)
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
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.token_in, self.token_out)
    }
}
