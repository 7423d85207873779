//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the pool's testable properties:
//!
//! 1. **Product non-decrease** — `reserve0 × reserve1` never shrinks
//!    across a swap.
//! 2. **Share conservation** — the per-provider share sum always equals
//!    the outstanding total.
//! 3. **Zero-reserve ⇔ zero-liquidity** — the pool is empty exactly
//!    when no shares are outstanding.
//! 4. **Round trip** — add-then-remove never returns more than was
//!    deposited.
//! 5. **Price symmetry** — `price(a,b) × price(b,a) ≈ SCALE²` within
//!    truncation tolerance.
//! 6. **Deposit clamping** — actual deposit amounts never exceed the
//!    desired amounts.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::context::CallContext;
use crate::domain::{Address, Amount, Liquidity, Price, SwapPath, Timestamp};
use crate::ledger::InMemoryLedger;
use crate::math;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn token_x() -> Address {
    Address::from_bytes([1u8; 32])
}

fn token_y() -> Address {
    Address::from_bytes([2u8; 32])
}

fn pool_account() -> Address {
    Address::from_bytes([99u8; 32])
}

fn alice() -> Address {
    Address::from_bytes([10u8; 32])
}

fn ctx() -> CallContext {
    CallContext::new(alice(), Timestamp::from_secs(1_000))
}

fn future() -> Timestamp {
    Timestamp::from_secs(2_000)
}

/// Pool seeded with (rx, ry) plus a ledger holding ample extra funds.
#[allow(clippy::panic)]
fn seeded(rx: u128, ry: u128) -> (Pool, InMemoryLedger) {
    let Ok(config) = PoolConfig::new(token_x(), token_y(), pool_account()) else {
        panic!("valid config");
    };
    let Ok(mut pool) = Pool::new(&config) else {
        panic!("valid pool");
    };
    let mut ledger = InMemoryLedger::new();
    ledger.mint(token_x(), alice(), Amount::MAX);
    ledger.mint(token_y(), alice(), Amount::MAX);
    ledger.approve(token_x(), alice(), pool_account(), Amount::MAX);
    ledger.approve(token_y(), alice(), pool_account(), Amount::MAX);
    let Ok(_) = pool.add_liquidity(
        &mut ledger,
        &ctx(),
        token_x(),
        token_y(),
        Amount::new(rx),
        Amount::new(ry),
        Amount::ZERO,
        Amount::ZERO,
        alice(),
        future(),
    ) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn shares_sum(pool: &Pool) -> u128 {
    pool.state()
        .liquidity_provided
        .values()
        .map(Liquidity::get)
        .sum()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10^12] to avoid degenerate pools.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000u128
}

/// Swap and deposit amounts in range [1, 10^9].
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Product Non-Decrease
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_product_non_decrease(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(rx, ry);
        let k_before = math::U256::from(pool.reserve0().get())
            * math::U256::from(pool.reserve1().get());

        let Ok(path) = SwapPath::new(token_x(), token_y()) else {
            return Ok(());
        };
        let Ok(_) = pool.swap_exact_tokens_for_tokens(
            &mut ledger,
            &ctx(),
            Amount::new(amount_in),
            Amount::ZERO,
            path,
            alice(),
            future(),
        ) else {
            return Ok(());
        };

        let k_after = math::U256::from(pool.reserve0().get())
            * math::U256::from(pool.reserve1().get());
        prop_assert!(
            k_after >= k_before,
            "product decreased: before={} after={}",
            k_before, k_after
        );
    }

    #[test]
    fn prop_swap_round_trip_loses_value(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(rx, ry);

        let Ok(forward) = SwapPath::new(token_x(), token_y()) else {
            return Ok(());
        };
        let Ok(result_xy) = pool.swap_exact_tokens_for_tokens(
            &mut ledger,
            &ctx(),
            Amount::new(amount_in),
            Amount::ZERO,
            forward,
            alice(),
            future(),
        ) else {
            return Ok(());
        };
        if result_xy.amount_out().is_zero() {
            return Ok(());
        }

        let Ok(backward) = SwapPath::new(token_y(), token_x()) else {
            return Ok(());
        };
        let Ok(result_yx) = pool.swap_exact_tokens_for_tokens(
            &mut ledger,
            &ctx(),
            result_xy.amount_out(),
            Amount::ZERO,
            backward,
            alice(),
            future(),
        ) else {
            return Ok(());
        };

        prop_assert!(
            result_yx.amount_out().get() <= amount_in,
            "round-trip should lose value: final={} > original={}",
            result_yx.amount_out().get(), amount_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Share Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_sum_to_total(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        deposit in amount_strategy(),
        burn_permille in 1u128..=1_000u128,
    ) {
        let (mut pool, mut ledger) = seeded(rx, ry);
        prop_assert_eq!(shares_sum(&pool), pool.total_liquidity().get());

        let bob = Address::from_bytes([11u8; 32]);
        ledger.mint(token_x(), bob, Amount::MAX);
        ledger.mint(token_y(), bob, Amount::MAX);
        ledger.approve(token_x(), bob, pool_account(), Amount::MAX);
        ledger.approve(token_y(), bob, pool_account(), Amount::MAX);
        let bob_ctx = CallContext::new(bob, Timestamp::from_secs(1_000));
        if pool.add_liquidity(
            &mut ledger,
            &bob_ctx,
            token_x(),
            token_y(),
            Amount::new(deposit),
            Amount::new(deposit),
            Amount::ZERO,
            Amount::ZERO,
            bob,
            future(),
        ).is_ok() {
            prop_assert_eq!(shares_sum(&pool), pool.total_liquidity().get());
        }

        let burn = Liquidity::new(pool.liquidity_of(&alice()).get() * burn_permille / 1_000);
        if !burn.is_zero() {
            let Ok(_) = pool.remove_liquidity(
                &mut ledger,
                &ctx(),
                token_x(),
                token_y(),
                burn,
                Amount::ZERO,
                Amount::ZERO,
                alice(),
                future(),
            ) else {
                return Ok(());
            };
            prop_assert_eq!(shares_sum(&pool), pool.total_liquidity().get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Zero-Reserve ⇔ Zero-Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_iff_no_shares(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(rx, ry);

        // Shift the ratio off the seed with a swap first.
        let Ok(path) = SwapPath::new(token_x(), token_y()) else {
            return Ok(());
        };
        let _ = pool.swap_exact_tokens_for_tokens(
            &mut ledger,
            &ctx(),
            Amount::new(swap_in),
            Amount::ZERO,
            path,
            alice(),
            future(),
        );

        // Non-empty pool has shares outstanding.
        prop_assert!(!pool.total_liquidity().is_zero());
        prop_assert!(!pool.reserve0().is_zero() || !pool.reserve1().is_zero());

        // Burning every share empties both reserves exactly.
        let all = pool.liquidity_of(&alice());
        let Ok(_) = pool.remove_liquidity(
            &mut ledger,
            &ctx(),
            token_x(),
            token_y(),
            all,
            Amount::ZERO,
            Amount::ZERO,
            alice(),
            future(),
        ) else {
            return Ok(());
        };
        prop_assert!(pool.total_liquidity().is_zero());
        prop_assert!(pool.reserve0().is_zero());
        prop_assert!(pool.reserve1().is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Deposit Round Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_remove_round_trip_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(rx, ry);

        let Ok(deposit) = pool.add_liquidity(
            &mut ledger,
            &ctx(),
            token_x(),
            token_y(),
            Amount::new(da),
            Amount::new(db),
            Amount::ZERO,
            Amount::ZERO,
            alice(),
            future(),
        ) else {
            return Ok(());
        };

        // Deposit clamping: actuals never exceed desired.
        prop_assert!(deposit.amount_a() <= Amount::new(da));
        prop_assert!(deposit.amount_b() <= Amount::new(db));

        let Ok(withdrawal) = pool.remove_liquidity(
            &mut ledger,
            &ctx(),
            token_x(),
            token_y(),
            deposit.liquidity_minted(),
            Amount::ZERO,
            Amount::ZERO,
            alice(),
            future(),
        ) else {
            return Ok(());
        };

        prop_assert!(
            withdrawal.amount_a() <= deposit.amount_a(),
            "withdrew more token A than deposited: {} > {}",
            withdrawal.amount_a(), deposit.amount_a()
        );
        prop_assert!(
            withdrawal.amount_b() <= deposit.amount_b(),
            "withdrew more token B than deposited: {} > {}",
            withdrawal.amount_b(), deposit.amount_b()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Price Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_symmetry(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
    ) {
        let (pool, _) = seeded(rx, ry);

        let Ok(forward) = pool.get_price(&token_x(), &token_y()) else {
            return Ok(());
        };
        let Ok(backward) = pool.get_price(&token_y(), &token_x()) else {
            return Ok(());
        };
        let Some(product) = math::mul_div(
            forward.get(),
            backward.get(),
            Price::SCALE,
            crate::domain::Rounding::Down,
        ) else {
            return Ok(());
        };

        // Each floor division loses less than one wad times the
        // opposite ratio; with reserves bounded to 10^12 the combined
        // loss stays far below one part per million of SCALE.
        let diff = Price::SCALE.abs_diff(product);
        prop_assert!(
            diff <= Price::SCALE / 1_000_000,
            "price symmetry broken: product={} diff={}",
            product, diff
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Quote Output Bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_amount_out_below_reserve(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let Ok(out) = Pool::get_amount_out(
            Amount::new(amount_in),
            Amount::new(rx),
            Amount::new(ry),
        ) else {
            return Ok(());
        };
        prop_assert!(
            out.get() < ry,
            "output {} reaches reserve {}",
            out.get(), ry
        );

        // Post-trade product never falls below the pre-trade product.
        let k_before = math::U256::from(rx) * math::U256::from(ry);
        let k_after = math::U256::from(rx + amount_in) * math::U256::from(ry - out.get());
        prop_assert!(k_after >= k_before);
    }
}
