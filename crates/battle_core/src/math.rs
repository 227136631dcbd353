//! Wide integer math utilities for deterministic resolution.
//!
//! Every intermediate value in the battle pipeline is an unsigned
//! 128-bit integer and every division floors. Floating-point
//! operations are never used: the results have to match an external
//! integer computation exactly, and a float round-trip would not.

use crate::error::{BattleError, Result};

/// Integer type for all intermediate battle math.
///
/// Products of three 64-bit inputs can exceed 128 bits, so the helpers
/// below check every multiplication instead of wrapping.
pub type Wide = u128;

/// One hundred percent in basis points.
pub const PERCENT_100: Wide = 10_000;

/// Multiply two values, failing on overflow.
pub fn mul(lhs: Wide, rhs: Wide, what: &'static str) -> Result<Wide> {
    lhs.checked_mul(rhs)
        .ok_or(BattleError::ArithmeticOverflow(what))
}

/// Add two values, failing on overflow.
pub fn add(lhs: Wide, rhs: Wide, what: &'static str) -> Result<Wide> {
    lhs.checked_add(rhs)
        .ok_or(BattleError::ArithmeticOverflow(what))
}

/// Floor division, failing on a zero divisor.
pub fn div(lhs: Wide, rhs: Wide, what: &'static str) -> Result<Wide> {
    lhs.checked_div(rhs).ok_or(BattleError::DivisionByZero(what))
}

/// Floor of `value * basis_points / 100%`.
///
/// ```
/// use battle_core::math::percentage_of;
///
/// // 10% of 1_005 floors to 100
/// assert_eq!(percentage_of(1_005, 1_000).unwrap(), 100);
/// ```
pub fn percentage_of(value: Wide, basis_points: Wide) -> Result<Wide> {
    div(
        mul(value, basis_points, "percentage")?,
        PERCENT_100,
        "percentage",
    )
}

/// Round `value` down to the nearest multiple of `unit`.
///
/// A zero unit leaves the value untouched.
#[must_use]
pub fn truncate_to_multiple(value: Wide, unit: Wide) -> Wide {
    if unit == 0 {
        return value;
    }
    value - value % unit
}
