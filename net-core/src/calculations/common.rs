//! Common utility functions for closing calculations.
//!
//! Rounding happens only at output boundaries. Intermediate sums keep full
//! precision so itemized lines do not compound rounding error before the
//! grand total is rounded once.

use rust_decimal::Decimal;

/// Rounds a decimal value to cents using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, never to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use net_core::calculations::common::round_cents;
///
/// assert_eq!(round_cents(dec!(214.495)), dec!(214.50));
/// assert_eq!(round_cents(dec!(214.494)), dec!(214.49));
/// assert_eq!(round_cents(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use net_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-12.50)), dec!(0));
/// assert_eq!(non_negative(dec!(12.50)), dec!(12.50));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
