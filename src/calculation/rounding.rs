//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on rounded monetary amounts.
pub const CENT_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to the cent, half away from zero.
///
/// Only totals are rounded; contribution line amounts keep full precision.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     round_to_cents(Decimal::from_str("140.675").unwrap()),
///     Decimal::from_str("140.68").unwrap()
/// );
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
