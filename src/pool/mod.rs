//! The pool state machine and its serialized handle.
//!
//! [`Pool`] owns the reserve and share accounting and exposes the four
//! mutating operations plus the pure quote functions. [`SharedPool`]
//! wraps it in a mutex for hosts where calls are not already
//! serialized.

mod constant_product;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{Pool, PoolState};
pub use shared::SharedPool;
