//! Single-pair constant product pool.
//!
//! The pool tracks two token reserves and the liquidity shares that
//! claim them. Swaps price against the constant product invariant
//! `reserve0 × reserve1 = k` with no fee:
//!
//! ```text
//! amount_out = reserve_out × amount_in / (reserve_in + amount_in)
//! ```
//!
//! Floor division makes the post-trade product greater than or equal to
//! the pre-trade product, so `k` never decreases across a swap.
//!
//! # Atomicity
//!
//! Every mutating operation runs in two phases. Phase one performs all
//! local validation (deadline, pair identity, amounts, slippage, share
//! balances) and computes the complete post-state without touching
//! anything. Phase two executes the ledger transfers and only then
//! writes the pool's own fields. A failed second transfer is compensated
//! by returning the first before the error surfaces, so the ledger and
//! the pool never disagree.

use std::collections::HashMap;

use crate::config::PoolConfig;
use crate::context::CallContext;
use crate::domain::{
    Address, Amount, DepositResult, Liquidity, Price, Rounding, SwapPath, SwapResult, Timestamp,
    TokenPair, WithdrawalResult,
};
use crate::error::{PoolError, Result, SlippageSide};
use crate::events::PoolEvent;
use crate::math;
use crate::traits::TokenLedger;

/// A snapshot of the pool's durable state fields.
///
/// This is the persistence surface: everything needed to reconstruct
/// the pool's accounting lives here. Enable the `serde` feature to
/// serialize it into whatever store hosts the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    /// First token in canonical order.
    pub token0: Address,
    /// Second token in canonical order.
    pub token1: Address,
    /// Reserve of `token0`.
    pub reserve0: Amount,
    /// Reserve of `token1`.
    pub reserve1: Amount,
    /// Sum of all outstanding liquidity shares.
    pub total_liquidity: Liquidity,
    /// Per-provider share balances. Fully redeemed providers keep a
    /// zero entry.
    pub liquidity_provided: HashMap<Address, Liquidity>,
}

/// A single-pair constant product swap pool.
///
/// Created from a validated [`PoolConfig`]; starts with zero reserves
/// and zero liquidity. The pool holds its reserves under its own ledger
/// account and mirrors every transfer in its reserve fields, so
/// `reserve0`/`reserve1` always equal the pool's actual token balances.
///
/// # Invariants
///
/// - `total_liquidity == 0` iff both reserves are zero.
/// - The sum of `liquidity_provided` entries equals `total_liquidity`.
/// - Swaps never decrease `reserve0 × reserve1`.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::context::CallContext;
/// use simple_swap::domain::{Address, Amount, Timestamp};
/// use simple_swap::ledger::InMemoryLedger;
/// use simple_swap::pool::Pool;
///
/// let token_x = Address::from_bytes([1u8; 32]);
/// let token_y = Address::from_bytes([2u8; 32]);
/// let pool_account = Address::from_bytes([99u8; 32]);
/// let alice = Address::from_bytes([10u8; 32]);
///
/// let config = PoolConfig::new(token_x, token_y, pool_account).expect("valid config");
/// let mut pool = Pool::new(&config).expect("valid pool");
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(token_x, alice, Amount::new(1_000));
/// ledger.mint(token_y, alice, Amount::new(1_000));
/// ledger.approve(token_x, alice, pool_account, Amount::MAX);
/// ledger.approve(token_y, alice, pool_account, Amount::MAX);
///
/// let ctx = CallContext::new(alice, Timestamp::from_secs(100));
/// let deposit = pool
///     .add_liquidity(
///         &mut ledger,
///         &ctx,
///         token_x,
///         token_y,
///         Amount::new(1_000),
///         Amount::new(1_000),
///         Amount::new(900),
///         Amount::new(900),
///         alice,
///         Timestamp::from_secs(200),
///     )
///     .expect("first deposit");
/// assert!(!deposit.liquidity_minted().is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    pair: TokenPair,
    account: Address,
    reserve0: Amount,
    reserve1: Amount,
    total_liquidity: Liquidity,
    liquidity_provided: HashMap<Address, Liquidity>,
    events: Vec<PoolEvent>,
}

impl Pool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`] or
    /// [`TokenPair::new`].
    pub fn new(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        let pair = TokenPair::new(config.token_a(), config.token_b())?;
        Ok(Self {
            pair,
            account: config.pool_account(),
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            total_liquidity: Liquidity::ZERO,
            liquidity_provided: HashMap::new(),
            events: Vec::new(),
        })
    }

    /// Returns the canonically ordered token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the ledger account holding the pool's reserves.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }

    /// Returns the reserve of `token0`.
    #[must_use]
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns the reserve of `token1`.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Returns the sum of all outstanding liquidity shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// Returns `provider`'s share balance. Unknown providers hold zero.
    #[must_use]
    pub fn liquidity_of(&self, provider: &Address) -> Liquidity {
        self.liquidity_provided
            .get(provider)
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// Drains and returns the event journal in emission order.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns a snapshot of the durable state fields.
    #[must_use]
    pub fn state(&self) -> PoolState {
        PoolState {
            token0: self.pair.token0(),
            token1: self.pair.token1(),
            reserve0: self.reserve0,
            reserve1: self.reserve1,
            total_liquidity: self.total_liquidity,
            liquidity_provided: self.liquidity_provided.clone(),
        }
    }

    /// Computes the constant product swap output. Pure: reads no pool
    /// state.
    ///
    /// `amount_out = reserve_out × amount_in / (reserve_in + amount_in)`
    /// with floor division, so the post-trade product never falls below
    /// the pre-trade product.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`] if `amount_in` or either reserve is
    ///   zero.
    /// - [`PoolError::Overflow`] if `reserve_in + amount_in` exceeds
    ///   `u128`.
    pub fn get_amount_out(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidInput("swap amount must be positive"));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InvalidInput("reserves must be positive"));
        }
        let denominator = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("swap denominator exceeds u128"))?;
        reserve_out
            .mul_div(&amount_in, &denominator, Rounding::Down)
            .ok_or(PoolError::Overflow("swap output exceeds u128"))
    }

    /// Quotes the amount of the second token that matches `amount_a` of
    /// the first at the current reserve ratio. Pure: reads no pool
    /// state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`] if `amount_a` or either reserve is
    ///   zero.
    /// - [`PoolError::Overflow`] if the quote exceeds `u128`.
    pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
        if amount_a.is_zero() {
            return Err(PoolError::InvalidInput("quote amount must be positive"));
        }
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(PoolError::InvalidInput("reserves must be positive"));
        }
        amount_a
            .mul_div(&reserve_b, &reserve_a, Rounding::Down)
            .ok_or(PoolError::Overflow("quote exceeds u128"))
    }

    /// Returns how much of `token_b` one unit of `token_a` is worth,
    /// scaled by [`Price::SCALE`].
    ///
    /// The ratio is taken over raw reserves; token decimal conventions
    /// are deliberately not normalized away.
    ///
    /// Returns [`Price::ZERO`] while the pool is uninitialized (either
    /// reserve zero) — an explicit sentinel, not an error.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if either address is zero, the two
    ///   are equal, or the unordered pair does not match the pool.
    /// - [`PoolError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn get_price(&self, token_a: &Address, token_b: &Address) -> Result<Price> {
        if token_a.is_zero() || token_b.is_zero() {
            return Err(PoolError::InvalidToken("token address must not be zero"));
        }
        if token_a == token_b {
            return Err(PoolError::InvalidToken("price requires two distinct tokens"));
        }
        if !self.pair.matches(token_a, token_b) {
            return Err(PoolError::InvalidToken("tokens do not match the pool pair"));
        }
        let (reserve_a, reserve_b) = self.oriented_reserves(token_a);
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Ok(Price::ZERO);
        }
        Price::from_reserves(reserve_b, reserve_a)
    }

    /// Deposits tokens at the current reserve ratio and mints liquidity
    /// shares to `to`.
    ///
    /// The first deposit takes both desired amounts exactly and mints
    /// the geometric mean `⌊√(amount_a × amount_b)⌋` of shares,
    /// establishing the initial exchange rate. Later deposits are
    /// clamped to the reserve ratio: whichever desired amount is the
    /// limiting side is taken in full and the other is scaled down to
    /// match, so neither actual amount ever exceeds its desired amount.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `ctx.now()` is past `deadline`.
    /// - [`PoolError::InvalidToken`] if `{token_a, token_b}` is not the
    ///   pool's pair.
    /// - [`PoolError::ZeroAmount`] if the deposit resolves to zero
    ///   minted shares.
    /// - [`PoolError::SlippageExceeded`] if an actual amount falls below
    ///   its minimum; the side names the caller's argument order.
    /// - [`PoolError::TransferFailed`] if the ledger rejects a pull; any
    ///   completed pull is returned first.
    /// - [`PoolError::Overflow`] if reserve or share totals would exceed
    ///   `u128`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity<L: TokenLedger>(
        &mut self,
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
        self.check_deadline(ctx, deadline)?;
        if !self.pair.matches(&token_a, &token_b) {
            return Err(PoolError::InvalidToken("tokens do not match the pool pair"));
        }

        let (reserve_a, reserve_b) = self.oriented_reserves(&token_a);
        let (actual_a, actual_b, minted) =
            Self::compute_deposit(reserve_a, reserve_b, amount_a_desired, amount_b_desired, self.total_liquidity)?;

        if actual_a < amount_a_min {
            return Err(PoolError::SlippageExceeded(SlippageSide::TokenA));
        }
        if actual_b < amount_b_min {
            return Err(PoolError::SlippageExceeded(SlippageSide::TokenB));
        }

        // Full post-state is computed before any external call.
        let new_reserve_a = reserve_a
            .checked_add(&actual_a)
            .ok_or(PoolError::Overflow("reserve exceeds u128 on deposit"))?;
        let new_reserve_b = reserve_b
            .checked_add(&actual_b)
            .ok_or(PoolError::Overflow("reserve exceeds u128 on deposit"))?;
        let new_total = self
            .total_liquidity
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("total liquidity exceeds u128"))?;
        let new_share = self
            .liquidity_of(&to)
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("provider share exceeds u128"))?;

        let caller = ctx.caller();
        ledger.transfer_from(token_a, self.account, caller, self.account, actual_a)?;
        if let Err(err) = ledger.transfer_from(token_b, self.account, caller, self.account, actual_b)
        {
            // Return the first leg before surfacing the failure.
            if ledger.transfer(token_a, self.account, caller, actual_a).is_err() {
                tracing::warn!("compensating transfer failed after partial deposit");
            }
            return Err(err.into());
        }

        self.set_oriented_reserves(&token_a, new_reserve_a, new_reserve_b);
        self.total_liquidity = new_total;
        self.liquidity_provided.insert(to, new_share);
        self.events.push(PoolEvent::LiquidityAdded {
            provider: caller,
            amount_a: actual_a,
            amount_b: actual_b,
            liquidity_minted: minted,
            timestamp: ctx.now(),
        });
        tracing::debug!(
            "liquidity added: amount_a={actual_a} amount_b={actual_b} minted={minted}"
        );

        Ok(DepositResult::new(actual_a, actual_b, minted))
    }

    /// Burns `liquidity` of the caller's shares and pays out the
    /// pro-rata portion of both reserves to `to`.
    ///
    /// Withdrawn amounts are computed against the pre-burn reserves and
    /// rounded down; a full burn of all outstanding shares always
    /// empties both reserves exactly.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `ctx.now()` is past `deadline`.
    /// - [`PoolError::InvalidToken`] if `{token_a, token_b}` is not the
    ///   pool's pair.
    /// - [`PoolError::ZeroAmount`] if `liquidity` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the caller's recorded
    ///   share is smaller than `liquidity`.
    /// - [`PoolError::SlippageExceeded`] if a withdrawn amount falls
    ///   below its minimum; the side names the caller's argument order.
    /// - [`PoolError::TransferFailed`] if the ledger cannot pay out.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity<L: TokenLedger>(
        &mut self,
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
        self.check_deadline(ctx, deadline)?;
        if !self.pair.matches(&token_a, &token_b) {
            return Err(PoolError::InvalidToken("tokens do not match the pool pair"));
        }
        if liquidity.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let caller = ctx.caller();
        let share = self.liquidity_of(&caller);
        if share < liquidity {
            return Err(PoolError::InsufficientLiquidity);
        }

        // Pro-rata redemption against pre-burn reserves, rounded down.
        let amount0 = liquidity
            .share_of(&self.reserve0, &self.total_liquidity, Rounding::Down)
            .ok_or(PoolError::Overflow("withdrawal exceeds u128"))?;
        let amount1 = liquidity
            .share_of(&self.reserve1, &self.total_liquidity, Rounding::Down)
            .ok_or(PoolError::Overflow("withdrawal exceeds u128"))?;
        let (amount_a, amount_b) = if token_a == self.pair.token0() {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };

        if amount_a < amount_a_min {
            return Err(PoolError::SlippageExceeded(SlippageSide::TokenA));
        }
        if amount_b < amount_b_min {
            return Err(PoolError::SlippageExceeded(SlippageSide::TokenB));
        }

        let new_reserve0 = self
            .reserve0
            .checked_sub(&amount0)
            .ok_or(PoolError::Overflow("reserve underflow on withdrawal"))?;
        let new_reserve1 = self
            .reserve1
            .checked_sub(&amount1)
            .ok_or(PoolError::Overflow("reserve underflow on withdrawal"))?;
        let new_total = self
            .total_liquidity
            .checked_sub(&liquidity)
            .ok_or(PoolError::Overflow("total liquidity underflow"))?;
        let new_share = share
            .checked_sub(&liquidity)
            .ok_or(PoolError::Overflow("provider share underflow"))?;

        // The reserve fields mirror the pool's ledger balances, so both
        // payouts are covered; a short balance means the collaborator
        // broke that mirror and nothing is paid out.
        if ledger.balance_of(token_a, self.account) < amount_a
            || ledger.balance_of(token_b, self.account) < amount_b
        {
            return Err(PoolError::TransferFailed(
                crate::error::TransferError::InsufficientBalance,
            ));
        }
        ledger.transfer(token_a, self.account, to, amount_a)?;
        if let Err(err) = ledger.transfer(token_b, self.account, to, amount_b) {
            if ledger.transfer(token_a, to, self.account, amount_a).is_err() {
                tracing::warn!("compensating transfer failed after partial withdrawal");
            }
            return Err(err.into());
        }

        self.reserve0 = new_reserve0;
        self.reserve1 = new_reserve1;
        self.total_liquidity = new_total;
        // A fully redeemed provider keeps a zero entry.
        self.liquidity_provided.insert(caller, new_share);
        self.events.push(PoolEvent::LiquidityRemoved {
            provider: caller,
            amount_a,
            amount_b,
            timestamp: ctx.now(),
        });
        tracing::debug!(
            "liquidity removed: amount_a={amount_a} amount_b={amount_b} burned={liquidity}"
        );

        Ok(WithdrawalResult::new(amount_a, amount_b))
    }

    /// Swaps an exact input amount along `path`, paying the output to
    /// `to`.
    ///
    /// Pulls `amount_in` of the path's input token from the caller,
    /// pays out the constant product quote of the output token, and
    /// shifts the two reserves accordingly. Liquidity shares are
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `ctx.now()` is past `deadline`.
    /// - [`PoolError::InvalidPath`] if a path token is not part of the
    ///   pool's pair.
    /// - [`PoolError::InvalidInput`] if `amount_in` is zero or the pool
    ///   is uninitialized.
    /// - [`PoolError::SlippageExceeded`] if the output falls below
    ///   `amount_out_min`.
    /// - [`PoolError::TransferFailed`] if the ledger rejects the pull;
    ///   a completed pull is returned before the error surfaces.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_tokens_for_tokens<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_in: Amount,
        amount_out_min: Amount,
        path: SwapPath,
        to: Address,
        deadline: Timestamp,
    ) -> Result<SwapResult> {
        self.check_deadline(ctx, deadline)?;
        let token_in = path.token_in();
        let token_out = path.token_out();
        if !self.pair.contains(&token_in) || !self.pair.contains(&token_out) {
            return Err(PoolError::InvalidPath(
                "path token is not part of the pool pair",
            ));
        }

        let (reserve_in, reserve_out) = self.oriented_reserves(&token_in);
        let amount_out = Self::get_amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out < amount_out_min {
            return Err(PoolError::SlippageExceeded(SlippageSide::AmountOut));
        }

        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("reserve exceeds u128 on swap"))?;
        // amount_out < reserve_out always holds for the quote formula.
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve underflow on swap"))?;

        let caller = ctx.caller();
        ledger.transfer_from(token_in, self.account, caller, self.account, amount_in)?;
        if let Err(err) = ledger.transfer(token_out, self.account, to, amount_out) {
            if ledger.transfer(token_in, self.account, caller, amount_in).is_err() {
                tracing::warn!("compensating transfer failed after partial swap");
            }
            return Err(err.into());
        }

        self.set_oriented_reserves(&token_in, new_reserve_in, new_reserve_out);
        self.events.push(PoolEvent::TokensSwapped {
            swapper: caller,
            token_in,
            token_out,
            timestamp: ctx.now(),
        });
        tracing::debug!("swap executed: amount_in={amount_in} amount_out={amount_out}");

        Ok(SwapResult::new(token_in, token_out, amount_in, amount_out))
    }

    // -- internals ----------------------------------------------------------

    fn check_deadline(&self, ctx: &CallContext, deadline: Timestamp) -> Result<()> {
        if ctx.now().is_past(deadline) {
            return Err(PoolError::Expired);
        }
        Ok(())
    }

    /// Returns `(reserve of first, reserve of other)` for a token known
    /// to be in the pair.
    fn oriented_reserves(&self, first: &Address) -> (Amount, Amount) {
        if *first == self.pair.token0() {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    /// Writes reserves given in the orientation of `first` back to
    /// canonical order.
    fn set_oriented_reserves(&mut self, first: &Address, reserve_first: Amount, reserve_other: Amount) {
        if *first == self.pair.token0() {
            self.reserve0 = reserve_first;
            self.reserve1 = reserve_other;
        } else {
            self.reserve1 = reserve_first;
            self.reserve0 = reserve_other;
        }
    }

    /// Resolves desired deposit amounts into actual amounts and the
    /// shares they mint.
    ///
    /// First deposit: both desired amounts are taken exactly and shares
    /// are the geometric mean of the two. Later deposits: the limiting
    /// side is taken in full, the other is quoted down to the reserve
    /// ratio, and shares are `total × actual_limiting / reserve_limiting`.
    fn compute_deposit(
        reserve_a: Amount,
        reserve_b: Amount,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        total: Liquidity,
    ) -> Result<(Amount, Amount, Liquidity)> {
        if total.is_zero() {
            let minted = math::isqrt_wide(amount_a_desired.get(), amount_b_desired.get());
            if minted == 0 {
                return Err(PoolError::ZeroAmount);
            }
            return Ok((amount_a_desired, amount_b_desired, Liquidity::new(minted)));
        }

        // Reserves are non-zero whenever shares are outstanding.
        let quoted_b = amount_a_desired
            .mul_div(&reserve_b, &reserve_a, Rounding::Down)
            .ok_or(PoolError::Overflow("deposit quote exceeds u128"))?;
        let (actual_a, actual_b, limiting, limiting_reserve) = if quoted_b <= amount_b_desired {
            (amount_a_desired, quoted_b, amount_a_desired, reserve_a)
        } else {
            let quoted_a = amount_b_desired
                .mul_div(&reserve_a, &reserve_b, Rounding::Down)
                .ok_or(PoolError::Overflow("deposit quote exceeds u128"))?;
            (quoted_a, amount_b_desired, amount_b_desired, reserve_b)
        };

        let minted = math::mul_div(
            total.get(),
            limiting.get(),
            limiting_reserve.get(),
            Rounding::Down,
        )
        .ok_or(PoolError::Overflow("minted shares exceed u128"))?;
        if minted == 0 {
            return Err(PoolError::ZeroAmount);
        }
        Ok((actual_a, actual_b, Liquidity::new(minted)))
    }
}
