//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `amount` to `places` decimal places using banker's rounding.
///
/// Rounding to the nearest even digit on exact halves keeps repeated
/// roundings from drifting in one direction.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap(), 2), Decimal::from_str("2.34").unwrap());
/// assert_eq!(round_money(Decimal::from_str("2.355").unwrap(), 2), Decimal::from_str("2.36").unwrap());
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}
