//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Address, Amount, DepositResult, Liquidity, Price, Rounding, SwapPath, SwapResult, Timestamp,
    TokenPair, WithdrawalResult,
};

// Re-export the pool and its serialized handle
pub use crate::pool::{Pool, PoolState, SharedPool};

// Re-export the collaborator seam and the bundled implementation
pub use crate::ledger::InMemoryLedger;
pub use crate::traits::TokenLedger;

// Re-export configuration and per-call context
pub use crate::config::PoolConfig;
pub use crate::context::CallContext;

// Re-export events
pub use crate::events::PoolEvent;

// Re-export error types
pub use crate::error::{PoolError, Result, SlippageSide, TransferError};
