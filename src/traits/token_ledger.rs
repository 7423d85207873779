//! External fungible-token collaborator seam.
//!
//! The pool never holds token balances itself: it instructs a
//! [`TokenLedger`] to move them and mirrors the result in its reserve
//! fields. The ledger is the only external dependency of the pool, and
//! the only party that can fail an operation after local validation has
//! passed.
//!
//! # Transfer Contract
//!
//! Implementations must be all-or-nothing per call: a returned error
//! means no balance changed. The pool relies on this to compensate a
//! completed first transfer when the second of a pair fails, restoring
//! both sides exactly.
//!
//! # Semantics
//!
//! - [`TokenLedger::transfer_from`] moves `amount` of `token` from
//!   `from` to `to` on the authority of `spender`, consuming allowance.
//! - [`TokenLedger::transfer`] moves `amount` of `token` out of `from`'s
//!   own balance with no allowance involved (the pool paying out of its
//!   own account).
//! - [`TokenLedger::balance_of`] is a read; unknown accounts hold zero.

use crate::domain::{Address, Amount};
use crate::error::TransferError;

/// Capability to move fungible tokens between accounts.
///
/// Methods return [`TransferError`] rather than the crate-wide error so
/// the pool can wrap failures as `PoolError::TransferFailed` with the
/// collaborator's reason preserved.
pub trait TokenLedger {
    /// Moves `amount` of `token` from `from` to `to`, spending
    /// `spender`'s allowance granted by `from`.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InsufficientBalance`] if `from` holds less
    ///   than `amount`.
    /// - [`TransferError::InsufficientAllowance`] if `spender`'s
    ///   allowance from `from` is less than `amount`.
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> core::result::Result<(), TransferError>;

    /// Moves `amount` of `token` from `from`'s own balance to `to`.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InsufficientBalance`] if `from` holds less
    ///   than `amount`.
    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> core::result::Result<(), TransferError>;

    /// Returns the balance of `token` held by `account`.
    #[must_use]
    fn balance_of(&self, token: Address, account: Address) -> Amount;
}
