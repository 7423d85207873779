//! 256-bit intermediate arithmetic for reserve math.
//!
//! Reserve products routinely overflow `u128` at wei scale, so every
//! multiply-then-divide in the crate runs through [`mul_div`], which
//! widens to 256 bits and only fails when the final quotient itself does
//! not fit in `u128`. The public domain types stay at `u128`.

use uint::construct_uint;

use crate::domain::Rounding;

construct_uint! {
    /// 256-bit unsigned integer for overflow-free intermediate products.
    pub struct U256(4);
}

/// Computes `a × b / divisor` with a 256-bit intermediate product and an
/// explicit rounding direction.
///
/// Returns `None` if `divisor` is zero or the quotient exceeds
/// `u128::MAX`.
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    // The product of two u128 values always fits in 256 bits.
    let product = U256::from(a) * U256::from(b);
    let (quotient, remainder) = product.div_mod(U256::from(divisor));
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U256::one()
    } else {
        quotient
    };
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.as_u128())
}

/// Floor integer square root of the product `a × b`.
///
/// Newton's method over the full 256-bit product; the root of a product
/// of two `u128` values always fits in `u128`.
#[must_use]
pub fn isqrt_wide(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    if n.is_zero() {
        return 0;
    }
    let mut x = n;
    let mut y = (x + U256::one()) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x.as_u128()
}
