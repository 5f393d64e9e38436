//! Decimal rounding for monetary amounts and percentages.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` and are rounded here, in one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for amounts and percentages.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to [`MONEY_SCALE`] places, halves away from zero.
///
/// `2.345` becomes `2.35` and `-2.345` becomes `-2.35`.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
