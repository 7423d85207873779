//! Per-call execution context.

use crate::domain::{Address, Timestamp};

/// The ambient facts a ledger VM would provide implicitly: who is
/// calling, and what time it is.
///
/// Every mutating pool operation takes a `CallContext` explicitly
/// instead of reading global state. Deadlines are compared against
/// [`CallContext::now`] at the moment the call is processed.
///
/// # Examples
///
/// ```
/// use simple_swap::context::CallContext;
/// use simple_swap::domain::{Address, Timestamp};
///
/// let ctx = CallContext::new(
///     Address::from_bytes([10u8; 32]),
///     Timestamp::from_secs(1_700_000_000),
/// );
/// assert_eq!(ctx.now().as_secs(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallContext {
    caller: Address,
    now: Timestamp,
}

impl CallContext {
    /// Creates a context for a call by `caller` processed at `now`.
    #[must_use]
    pub const fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Returns the processing time of the call.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}
