//! Chain-agnostic account and token address.

use core::fmt;

/// A generic, chain-agnostic address identifying a token contract or an
/// account on any blockchain.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid addresses, so construction is infallible; the all-zero value is
/// the conventional null identity and is rejected wherever a real token
/// or account is required.
///
/// Addresses order lexicographically, which gives the pool its canonical
/// token ordering.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Address;
///
/// let addr = Address::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(Address::ZERO < addr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero null address.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` if this is the null address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
