//! In-memory token ledger.
//!
//! A self-contained [`TokenLedger`] implementation backed by hash maps,
//! used by the integration tests and by embedders that have no real
//! ledger to delegate to. Balances and allowances follow standard
//! fungible-token semantics: transfers revert on insufficient balance,
//! `transfer_from` additionally consumes the spender's allowance, and an
//! allowance of `Amount::MAX` is treated as unlimited and never
//! decremented.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::TransferError;
use crate::traits::TokenLedger;

/// Hash-map backed balances and allowances for any number of tokens.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Amount};
/// use simple_swap::ledger::InMemoryLedger;
/// use simple_swap::traits::TokenLedger;
///
/// let token = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([10u8; 32]);
/// let bob = Address::from_bytes([11u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(1_000));
/// ledger
///     .transfer(token, alice, bob, Amount::new(400))
///     .expect("funded");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    /// `(token, account) -> balance`.
    balances: HashMap<(Address, Address), Amount>,
    /// `(token, owner, spender) -> allowance`.
    allowances: HashMap<(Address, Address, Address), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `token` to `account` out of thin air.
    ///
    /// Saturates at `Amount::MAX`; a test fixture never needs more.
    pub fn mint(&mut self, token: Address, account: Address, amount: Amount) {
        let balance = self.balances.entry((token, account)).or_insert(Amount::ZERO);
        *balance = balance.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Sets `spender`'s allowance over `owner`'s `token` balance.
    ///
    /// Overwrites any previous allowance, like a standard `approve`.
    pub fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((token, owner, spender), amount);
    }

    /// Returns `spender`'s remaining allowance over `owner`'s `token`
    /// balance.
    #[must_use]
    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn debit(
        &mut self,
        token: Address,
        account: Address,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        let balance = self.balance_of(token, account);
        let remaining = balance
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance)?;
        self.balances.insert((token, account), remaining);
        Ok(())
    }

    fn credit(&mut self, token: Address, account: Address, amount: Amount) {
        let balance = self.balances.entry((token, account)).or_insert(Amount::ZERO);
        *balance = balance.checked_add(&amount).unwrap_or(Amount::MAX);
    }
}

impl TokenLedger for InMemoryLedger {
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        let allowance = self.allowance(token, from, spender);
        if allowance < amount {
            return Err(TransferError::InsufficientAllowance);
        }
        self.debit(token, from, amount)?;
        // Unlimited approvals are never drawn down.
        if allowance != Amount::MAX {
            let remaining = allowance
                .checked_sub(&amount)
                .ok_or(TransferError::InsufficientAllowance)?;
            self.allowances.insert((token, from, spender), remaining);
        }
        self.credit(token, to, amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        self.debit(token, from, amount)?;
        self.credit(token, to, amount);
        Ok(())
    }

    fn balance_of(&self, token: Address, account: Address) -> Amount {
        self.balances
            .get(&(token, account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}
