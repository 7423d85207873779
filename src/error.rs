//! Unified error types for the swap pool library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every failure is a rejected call: no variant is retried or
//! recovered internally, and a failed operation leaves pool state exactly
//! as it was.

use core::fmt;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Identifies which caller-supplied floor a slippage failure violated.
///
/// `TokenA` and `TokenB` refer to the caller's argument order in
/// `add_liquidity` / `remove_liquidity`, not the pool's canonical token
/// order. `AmountOut` is the output floor of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlippageSide {
    /// The first token argument fell below its minimum.
    TokenA,
    /// The second token argument fell below its minimum.
    TokenB,
    /// The swap output fell below `amount_out_min`.
    AmountOut,
}

impl fmt::Display for SlippageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenA => write!(f, "token A"),
            Self::TokenB => write!(f, "token B"),
            Self::AmountOut => write!(f, "amount out"),
        }
    }
}

/// Failure reported by the external token ledger collaborator.
///
/// The pool propagates these verbatim inside
/// [`PoolError::TransferFailed`]; it never retries a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferError {
    /// The sending account holds less than the requested amount.
    InsufficientBalance,
    /// The spender's allowance from the owner is less than the requested
    /// amount.
    InsufficientAllowance,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBalance => write!(f, "insufficient token balance"),
            Self::InsufficientAllowance => write!(f, "insufficient token allowance"),
        }
    }
}

impl std::error::Error for TransferError {}

/// Unified error enum for all pool operations.
///
/// Variants carry a `&'static str` context payload where a message adds
/// information beyond the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A token identifier is zero, duplicated, or not part of the pool's
    /// pair.
    InvalidToken(&'static str),
    /// A swap path is malformed: wrong length, duplicate entries, or an
    /// entry outside the pool's pair.
    InvalidPath(&'static str),
    /// The call was processed after its deadline.
    Expired,
    /// A zero amount where a positive one is required.
    ZeroAmount,
    /// An input fails validation before any state is touched.
    InvalidInput(&'static str),
    /// The operation's outcome violates a caller-supplied minimum.
    SlippageExceeded(SlippageSide),
    /// A burn request exceeds the caller's recorded share.
    InsufficientLiquidity,
    /// The token ledger rejected a transfer; the operation was rolled
    /// back.
    TransferFailed(TransferError),
    /// Checked arithmetic overflowed.
    Overflow(&'static str),
    /// Division by zero in an arithmetic helper.
    DivisionByZero,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken(msg) => write!(f, "invalid token: {msg}"),
            Self::InvalidPath(msg) => write!(f, "invalid path: {msg}"),
            Self::Expired => write!(f, "transaction deadline has passed"),
            Self::ZeroAmount => write!(f, "amount must be positive"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::SlippageExceeded(side) => write!(f, "slippage exceeded on {side}"),
            Self::InsufficientLiquidity => write!(f, "insufficient liquidity"),
            Self::TransferFailed(err) => write!(f, "token transfer failed: {err}"),
            Self::Overflow(msg) => write!(f, "arithmetic overflow: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TransferFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransferError> for PoolError {
    fn from(err: TransferError) -> Self {
        Self::TransferFailed(err)
    }
}
