//! Fixed-point exchange rate between the pooled tokens.

use core::fmt;

use super::Amount;
use crate::error::{PoolError, Result};
use crate::math;

/// Exchange rate scaled by [`Price::SCALE`] (`10^18`).
///
/// A price of `2 × SCALE` means one raw unit of the base token is worth
/// two raw units of the quote token. The scale is fixed and independent
/// of either token's own decimal convention: prices are ratios of raw
/// reserves, never normalized by token decimals.
///
/// Integer fixed-point keeps price math deterministic and bit-exact,
/// which floating point cannot guarantee across platforms.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Price};
///
/// // 200 quote units per 100 base units → price 2.0
/// let price = Price::from_reserves(Amount::new(200), Amount::new(100)).expect("non-zero base");
/// assert_eq!(price.get(), 2 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Zero price, the sentinel for an uninitialized pool.
    pub const ZERO: Self = Self(0);

    /// Price ratio of 1:1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from an already-scaled wad value.
    #[must_use]
    pub const fn from_wad(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes `quote_reserve × SCALE / base_reserve` (floor).
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`PoolError::Overflow`] if the scaled quotient exceeds `u128`.
    pub fn from_reserves(quote_reserve: Amount, base_reserve: Amount) -> Result<Self> {
        if base_reserve.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        math::mul_div(
            quote_reserve.get(),
            Self::SCALE,
            base_reserve.get(),
            super::Rounding::Down,
        )
        .map(Self)
        .ok_or(PoolError::Overflow("scaled price exceeds u128"))
    }

    /// Computes the reciprocal price: `SCALE² / self` (floor).
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if the price is zero.
    /// - [`PoolError::Overflow`] if the reciprocal exceeds `u128`.
    pub fn inverse(&self) -> Result<Self> {
        if self.0 == 0 {
            return Err(PoolError::DivisionByZero);
        }
        math::mul_div(Self::SCALE, Self::SCALE, self.0, super::Rounding::Down)
            .map(Self)
            .ok_or(PoolError::Overflow("reciprocal price exceeds u128"))
    }
}

impl fmt::Display for Price {
    /// Renders the price as a decimal number, trimming trailing zeros
    /// from the fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / Self::SCALE;
        let fraction = self.0 % Self::SCALE;
        if fraction == 0 {
            return write!(f, "{integer}");
        }
        let padded = format!("{fraction:018}");
        write!(f, "{integer}.{}", padded.trim_end_matches('0'))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Rounding;

    // -- Constants ----------------------------------------------------------

    #[test]
    fn one_is_scale() {
        assert_eq!(Price::ONE.get(), Price::SCALE);
    }

    #[test]
    fn zero_is_zero() {
        assert!(Price::ZERO.is_zero());
        assert!(!Price::ONE.is_zero());
    }

    // -- from_reserves ------------------------------------------------------

    #[test]
    fn from_reserves_two_to_one() {
        let price = Price::from_reserves(Amount::new(200), Amount::new(100));
        assert_eq!(price, Ok(Price::from_wad(2 * Price::SCALE)));
    }

    #[test]
    fn from_reserves_half() {
        let price = Price::from_reserves(Amount::new(100), Amount::new(200));
        assert_eq!(price, Ok(Price::from_wad(Price::SCALE / 2)));
    }

    #[test]
    fn from_reserves_zero_base_rejected() {
        let price = Price::from_reserves(Amount::new(100), Amount::ZERO);
        assert_eq!(price, Err(PoolError::DivisionByZero));
    }

    #[test]
    fn from_reserves_wei_scale_reserves() {
        // 1000 tokens of 18 decimals each side: the intermediate product
        // is far beyond u128, the quotient is exactly SCALE.
        let wei = Amount::new(1_000 * Price::SCALE);
        let price = Price::from_reserves(wei, wei);
        assert_eq!(price, Ok(Price::ONE));
    }

    #[test]
    fn from_reserves_overflow_rejected() {
        let price = Price::from_reserves(Amount::MAX, Amount::new(1));
        assert_eq!(price, Err(PoolError::Overflow("scaled price exceeds u128")));
    }

    // -- inverse ------------------------------------------------------------

    #[test]
    fn inverse_of_two_is_half() {
        let price = Price::from_wad(2 * Price::SCALE);
        assert_eq!(price.inverse(), Ok(Price::from_wad(Price::SCALE / 2)));
    }

    #[test]
    fn inverse_of_zero_rejected() {
        assert_eq!(Price::ZERO.inverse(), Err(PoolError::DivisionByZero));
    }

    #[test]
    fn inverse_round_trip_within_truncation() {
        let Ok(price) = Price::from_reserves(Amount::new(300), Amount::new(700)) else {
            panic!("expected Ok");
        };
        let (Ok(inv), Ok(back)) = (price.inverse(), price.inverse().and_then(|p| p.inverse()))
        else {
            panic!("expected Ok");
        };
        assert!(!inv.is_zero());
        // Two floor divisions lose at most a few wad of precision.
        let diff = price.get().abs_diff(back.get());
        assert!(diff <= 10, "diff={diff}");
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_integer() {
        assert_eq!(format!("{}", Price::from_wad(2 * Price::SCALE)), "2");
    }

    #[test]
    fn display_fraction_trimmed() {
        assert_eq!(format!("{}", Price::from_wad(Price::SCALE / 2)), "0.5");
    }

    #[test]
    fn display_zero() {
        assert_eq!(format!("{}", Price::ZERO), "0");
    }

    // -- sanity: mul_div helper agrees with the price formula ---------------

    #[test]
    fn matches_manual_mul_div() {
        let manual = math::mul_div(200, Price::SCALE, 100, Rounding::Down);
        assert_eq!(manual, Some(2 * Price::SCALE));
    }
}
