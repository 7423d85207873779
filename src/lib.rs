//! # Simple Swap
//!
//! Single-pair constant product swap pool: reserve bookkeeping,
//! proportional liquidity shares, and fee-less swaps with deadline and
//! slippage protection.
//!
//! The pool owns two canonically ordered token reserves and the
//! liquidity shares that claim them. Four operations mutate it —
//! `add_liquidity`, `remove_liquidity`, and `swap_exact_tokens_for_tokens`
//! on [`Pool`](pool::Pool), each atomic and all-or-nothing — plus the
//! pure quote functions `get_amount_out` and `get_price`. Token custody
//! lives behind the [`TokenLedger`](traits::TokenLedger) seam; the crate
//! ships an in-memory implementation for tests and embedders.
//!
//! # Quick Start
//!
//! ```rust
//! use simple_swap::config::PoolConfig;
//! use simple_swap::context::CallContext;
//! use simple_swap::domain::{Address, Amount, SwapPath, Timestamp};
//! use simple_swap::ledger::InMemoryLedger;
//! use simple_swap::pool::Pool;
//!
//! // 1. Identify the two tokens and the pool's own ledger account
//! let token_x = Address::from_bytes([1u8; 32]);
//! let token_y = Address::from_bytes([2u8; 32]);
//! let pool_account = Address::from_bytes([99u8; 32]);
//!
//! let config = PoolConfig::new(token_x, token_y, pool_account).expect("valid config");
//! let mut pool = Pool::new(&config).expect("pool created");
//!
//! // 2. Fund a provider on the ledger and approve the pool
//! let alice = Address::from_bytes([10u8; 32]);
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(token_x, alice, Amount::new(1_000_000));
//! ledger.mint(token_y, alice, Amount::new(1_000_000));
//! ledger.approve(token_x, alice, pool_account, Amount::MAX);
//! ledger.approve(token_y, alice, pool_account, Amount::MAX);
//!
//! // 3. Seed liquidity
//! let ctx = CallContext::new(alice, Timestamp::from_secs(1_000));
//! let deadline = Timestamp::from_secs(2_000);
//! let deposit = pool
//!     .add_liquidity(
//!         &mut ledger, &ctx, token_x, token_y,
//!         Amount::new(100_000), Amount::new(100_000),
//!         Amount::new(95_000), Amount::new(95_000),
//!         alice, deadline,
//!     )
//!     .expect("first deposit");
//! assert!(!deposit.liquidity_minted().is_zero());
//!
//! // 4. Swap 1 000 of token X for token Y
//! let path = SwapPath::new(token_x, token_y).expect("distinct tokens");
//! let result = pool
//!     .swap_exact_tokens_for_tokens(
//!         &mut ledger, &ctx, Amount::new(1_000), Amount::new(900),
//!         path, alice, deadline,
//!     )
//!     .expect("swap succeeded");
//! assert!(result.amount_out() >= Amount::new(900));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  builds PoolConfig, supplies CallContext per call
//! └──────┬──────┘
//!        │ add_liquidity / remove_liquidity / swap / get_price
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  reserves, shares, events — validate then commit
//! └──────┬──────┘
//!        │ transfer_from / transfer / balance_of
//!        ▼
//! ┌─────────────┐
//! │ TokenLedger  │  external token custody (InMemoryLedger for tests)
//! └─────────────┘
//! ```
//!
//! Hosts without serialized calls wrap the pool in
//! [`SharedPool`](pool::SharedPool), which reproduces ledger-style
//! call-atomicity behind a mutex.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`TokenPair`](domain::TokenPair), etc. |
//! | [`traits`] | The [`TokenLedger`](traits::TokenLedger) collaborator seam |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) construction blueprint |
//! | [`context`] | [`CallContext`](context::CallContext): caller identity and processing time |
//! | [`pool`] | [`Pool`](pool::Pool) state machine and [`SharedPool`](pool::SharedPool) handle |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) token ledger implementation |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) journal entries |
//! | [`math`] | 256-bit `mul_div` and wide integer square root |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on domain types, events, and state snapshots |

pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
