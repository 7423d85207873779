//! Pool construction blueprint.

use crate::domain::Address;
use crate::error::{PoolError, Result};

/// Configuration for a single-pair swap pool.
///
/// Defines the pool's immutable identity: the two pooled tokens (in any
/// order; the pool canonicalizes them) and the ledger account the pool
/// holds its reserves under.
///
/// # Validation
///
/// - Both token addresses are non-zero and distinct.
/// - The pool account is non-zero and is not one of the tokens.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::Address;
///
/// let config = PoolConfig::new(
///     Address::from_bytes([1u8; 32]),
///     Address::from_bytes([2u8; 32]),
///     Address::from_bytes([99u8; 32]),
/// )
/// .expect("valid config");
/// assert_eq!(config.pool_account(), Address::from_bytes([99u8; 32]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    token_a: Address,
    token_b: Address,
    pool_account: Address,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] or
    /// [`PoolError::InvalidInput`] if validation fails.
    pub fn new(token_a: Address, token_b: Address, pool_account: Address) -> Result<Self> {
        let config = Self {
            token_a,
            token_b,
            pool_account,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if either token address is zero or
    ///   the two are equal.
    /// - [`PoolError::InvalidInput`] if the pool account is zero or
    ///   collides with a token address.
    pub fn validate(&self) -> Result<()> {
        if self.token_a.is_zero() || self.token_b.is_zero() {
            return Err(PoolError::InvalidToken("token address must not be zero"));
        }
        if self.token_a == self.token_b {
            return Err(PoolError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        if self.pool_account.is_zero() {
            return Err(PoolError::InvalidInput("pool account must not be zero"));
        }
        if self.pool_account == self.token_a || self.pool_account == self.token_b {
            return Err(PoolError::InvalidInput(
                "pool account must differ from both token addresses",
            ));
        }
        Ok(())
    }

    /// Returns the first token address as supplied.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.token_a
    }

    /// Returns the second token address as supplied.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.token_b
    }

    /// Returns the ledger account holding the pool's reserves.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.pool_account
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    #[test]
    fn valid_config() {
        let Ok(config) = PoolConfig::new(addr(1), addr(2), addr(99)) else {
            panic!("expected Ok");
        };
        assert_eq!(config.token_a(), addr(1));
        assert_eq!(config.token_b(), addr(2));
        assert_eq!(config.pool_account(), addr(99));
    }

    #[test]
    fn rejects_zero_token() {
        assert!(PoolConfig::new(Address::ZERO, addr(2), addr(99)).is_err());
        assert!(PoolConfig::new(addr(1), Address::ZERO, addr(99)).is_err());
    }

    #[test]
    fn rejects_duplicate_tokens() {
        let Err(e) = PoolConfig::new(addr(1), addr(1), addr(99)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            PoolError::InvalidToken("token pair requires two distinct addresses")
        );
    }

    #[test]
    fn rejects_zero_pool_account() {
        assert!(PoolConfig::new(addr(1), addr(2), Address::ZERO).is_err());
    }

    #[test]
    fn rejects_pool_account_colliding_with_token() {
        assert!(PoolConfig::new(addr(1), addr(2), addr(1)).is_err());
        assert!(PoolConfig::new(addr(1), addr(2), addr(2)).is_err());
    }

    #[test]
    fn validate_is_idempotent() {
        let Ok(config) = PoolConfig::new(addr(1), addr(2), addr(99)) else {
            panic!("expected Ok");
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
