//! Mutex-serialized pool handle.
//!
//! A ledger VM processes one state-mutating call to completion before
//! the next begins. Outside that environment the same guarantee has to
//! be made explicit: [`SharedPool`] owns the pool behind a single
//! `std::sync::Mutex`, so no two mutating operations ever interleave
//! their reads and writes. Reads take the lock only long enough to
//! snapshot; the pure quote functions on [`Pool`] need no lock at all.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Pool, PoolState};
use crate::context::CallContext;
use crate::domain::{
    Address, Amount, DepositResult, Liquidity, Price, SwapPath, SwapResult, Timestamp,
    WithdrawalResult,
};
use crate::error::Result;
use crate::events::PoolEvent;
use crate::traits::TokenLedger;

/// Clonable, thread-safe handle to a [`Pool`].
///
/// All clones refer to the same pool. Each operation acquires the lock
/// for its full duration, reproducing the ledger's call-atomicity.
///
/// Lock poisoning is recovered by taking the inner value: pool
/// operations never panic between state writes, so a poisoned pool is
/// still consistent.
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<Mutex<Pool>>,
}

impl SharedPool {
    /// Wraps a pool in a serialized handle.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Pool> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialized [`Pool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Propagates the inner operation's error unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity<L: TokenLedger>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        token_a: Address,
        token_b: Address,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
        to: Address,
        deadline: Timestamp,
    ) -> Result<DepositResult> {
        self.lock().add_liquidity(
            ledger,
            ctx,
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        )
    }

    /// Serialized [`Pool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Propagates the inner operation's error unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity<L: TokenLedger>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        token_a: Address,
        token_b: Address,
        liquidity: Liquidity,
        amount_a_min: Amount,
        amount_b_min: Amount,
        to: Address,
        deadline: Timestamp,
    ) -> Result<WithdrawalResult> {
        self.lock().remove_liquidity(
            ledger,
            ctx,
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        )
    }

    /// Serialized [`Pool::swap_exact_tokens_for_tokens`].
    ///
    /// # Errors
    ///
    /// Propagates the inner operation's error unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_tokens_for_tokens<L: TokenLedger>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_in: Amount,
        amount_out_min: Amount,
        path: SwapPath,
        to: Address,
        deadline: Timestamp,
    ) -> Result<SwapResult> {
        self.lock().swap_exact_tokens_for_tokens(
            ledger,
            ctx,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        )
    }

    /// Locked read of [`Pool::get_price`].
    ///
    /// # Errors
    ///
    /// Propagates the inner operation's error unchanged.
    pub fn get_price(&self, token_a: &Address, token_b: &Address) -> Result<Price> {
        self.lock().get_price(token_a, token_b)
    }

    /// Drains the event journal under the lock.
    #[must_use]
    pub fn take_events(&self) -> Vec<PoolEvent> {
        self.lock().take_events()
    }

    /// Snapshots the durable state fields under the lock.
    #[must_use]
    pub fn snapshot(&self) -> PoolState {
        self.lock().state()
    }

    /// Runs an arbitrary read against the pool under the lock.
    ///
    /// Useful for composite reads that must observe one consistent
    /// state, e.g. both reserves plus a provider's share.
    pub fn with<R>(&self, f: impl FnOnce(&Pool) -> R) -> R {
        f(&self.lock())
    }
}
