//! Observable pool events.
//!
//! Every committed mutation appends one event to the pool's journal.
//! Events exist for external consumers (indexers, UIs); nothing in the
//! pool reads them back. The journal is drained with
//! `Pool::take_events`.

use crate::domain::{Address, Amount, Liquidity, Timestamp};

/// A state mutation the pool has committed.
///
/// Amount fields follow the caller's argument order of the operation
/// that emitted the event, matching what the caller was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Liquidity was deposited and shares were minted.
    LiquidityAdded {
        /// The account that made the deposit.
        provider: Address,
        /// Actual deposit of the caller's first token.
        amount_a: Amount,
        /// Actual deposit of the caller's second token.
        amount_b: Amount,
        /// Shares minted to the recipient.
        liquidity_minted: Liquidity,
        /// Processing time of the call.
        timestamp: Timestamp,
    },
    /// Liquidity shares were burned and reserves paid out.
    LiquidityRemoved {
        /// The account that burned its shares.
        provider: Address,
        /// Withdrawn amount of the caller's first token.
        amount_a: Amount,
        /// Withdrawn amount of the caller's second token.
        amount_b: Amount,
        /// Processing time of the call.
        timestamp: Timestamp,
    },
    /// A swap moved reserves between the two tokens.
    TokensSwapped {
        /// The account that initiated the swap.
        swapper: Address,
        /// Token pulled from the swapper.
        token_in: Address,
        /// Token paid out to the recipient.
        token_out: Address,
        /// Processing time of the call.
        timestamp: Timestamp,
    },
}

impl PoolEvent {
    /// Returns the processing time recorded in the event.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        match self {
            Self::LiquidityAdded { timestamp, .. }
            | Self::LiquidityRemoved { timestamp, .. }
            | Self::TokensSwapped { timestamp, .. } => *timestamp,
        }
    }
}
