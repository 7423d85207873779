//! Liquidity share units.

use core::fmt;

use super::{Amount, Rounding};
use crate::math;

/// Liquidity shares representing a proportional claim on both reserves.
///
/// Distinct from [`Amount`] because shares are not denominated in either
/// pooled token: they measure a fraction of the pool, minted on deposit
/// and burned on withdrawal. All `u128` values are valid share counts.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share count is zero.
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

    /// Computes the pro-rata share of `reserve` that `self` shares claim
    /// out of `total` shares: `reserve × self / total`, with a 256-bit
    /// intermediate.
    ///
    /// Returns `None` if `total` is zero or the quotient does not fit in
    /// `u128`.
    #[must_use]
    pub fn share_of(&self, reserve: &Amount, total: &Self, rounding: Rounding) -> Option<Amount> {
        math::mul_div(reserve.get(), self.0, total.0, rounding).map(Amount::new)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
