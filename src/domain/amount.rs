//! Raw token amount with checked arithmetic.

use core::fmt;

use super::Rounding;
use crate::math;

/// A raw token amount in the smallest unit (wei, satoshi, or equivalent).
///
/// `Amount` never interprets decimals: the pool quotes and prices raw
/// units exactly as the ledger holds them. All `u128` values are valid
/// amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking. Products are
/// computed through a 256-bit intermediate so `mul_div` never overflows
/// unless the final quotient itself exceeds `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// // 100 * 200 / 300 = 66.66… → floor 66
/// let q = a.mul_div(&b, &Amount::new(300), Rounding::Down);
/// assert_eq!(q, Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self × mul / div` with a 256-bit intermediate product
    /// and explicit rounding direction.
    ///
    /// Returns `None` if `div` is zero or the quotient does not fit in
    /// `u128`.
    #[must_use]
    pub fn mul_div(&self, mul: &Self, div: &Self, rounding: Rounding) -> Option<Self> {
        math::mul_div(self.0, mul.0, div.0, rounding).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
