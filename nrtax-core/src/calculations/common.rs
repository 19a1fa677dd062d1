//! Shared rounding helpers.
//!
//! Rounding is applied at exactly two points of a calculation — the wage
//! and NEC subtotals (cents) and the final total (whole dollars) — so
//! intermediate values stay unrounded and errors never compound.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, per financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use nrtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole dollar using half-up rounding.
///
/// IRS forms specify half-up on whole-dollar lines: 50 cents rounds up,
/// never to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use nrtax_core::calculations::common::round_to_whole_dollar;
///
/// assert_eq!(round_to_whole_dollar(dec!(105.50)), dec!(106));
/// assert_eq!(round_to_whole_dollar(dec!(105.49)), dec!(105));
/// ```
pub fn round_to_whole_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
