//! Stay price calculation.
//!
//! Combines the per-night rates and the extra guest charge into a single
//! [`PriceBreakdown`]. Every flow that shows or stores a price (search,
//! quote, booking creation, booking update) goes through
//! [`calculate_stay_price`], so estimated and confirmed prices cannot drift.

use crate::config::PricingRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PriceBreakdown, Room, StayInterval};

use super::{calculate_extra_guest_charge, calculate_nightly_prices};

/// Rejects guest counts below one or above the room's capacity.
pub fn validate_guest_count(room: &Room, guest_count: u32) -> EngineResult<()> {
    if guest_count < 1 {
        return Err(EngineError::InvalidGuestCount {
            guest_count,
            message: "at least one guest is required".to_string(),
        });
    }
    if guest_count > room.capacity {
        return Err(EngineError::InvalidGuestCount {
            guest_count,
            message: format!(
                "room {} accepts at most {} guest(s)",
                room.id, room.capacity
            ),
        });
    }
    Ok(())
}

/// Calculates the total price of `stay` in `room` for `guest_count` guests.
///
/// # Arguments
///
/// * `room` - The room being priced
/// * `stay` - The nights being priced
/// * `guest_count` - Party size, between 1 and the room's capacity
/// * `rules` - Surcharges, base occupancy and rounding
///
/// # Errors
///
/// * [`EngineError::InvalidGuestCount`] for an empty party or one the room
///   cannot hold
/// * [`EngineError::InvalidPrice`] when the room carries a negative price
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::calculate_stay_price;
/// use stay_engine::config::PricingRules;
/// use stay_engine::models::{ExtraBed, Room, StayInterval};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "102".to_string(),
///     name: String::new(),
///     capacity: 3,
///     price_per_night: Decimal::new(400, 0),
///     extra_bed: ExtraBed {
///         available: true,
///         max_count: 1,
///         price_per_night: Decimal::new(50, 0),
///     },
/// };
/// // Monday and Tuesday nights
/// let stay = StayInterval::new(
///     NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
/// )
/// .unwrap();
///
/// let breakdown = calculate_stay_price(&room, &stay, 3, &PricingRules::default()).unwrap();
/// // 2 × 400 + 1 × 50 × 2
/// assert_eq!(breakdown.total, Decimal::new(900, 0));
/// ```
pub fn calculate_stay_price(
    room: &Room,
    stay: &StayInterval,
    guest_count: u32,
    rules: &PricingRules,
) -> EngineResult<PriceBreakdown> {
    validate_guest_count(room, guest_count)?;
    room.validate_prices()?;

    let nights = stay.nights();

    let nightly = calculate_nightly_prices(room, stay, rules, 1);
    let extra = calculate_extra_guest_charge(room, guest_count, nights, rules, 2);

    let total = nightly.base_total + extra.charge;

    let total_step = AuditStep {
        step_number: 3,
        rule_id: "stay_total".to_string(),
        rule_name: "Stay Total".to_string(),
        input: serde_json::json!({
            "base_total": nightly.base_total.normalize().to_string(),
            "extra_guest_charge": extra.charge.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
        }),
        reasoning: format!(
            "Stay total: {} + {} = {}",
            nightly.base_total.normalize(),
            extra.charge.normalize(),
            total.normalize()
        ),
    };

    Ok(PriceBreakdown {
        nights,
        per_night_prices: nightly.per_night_prices,
        base_total: nightly.base_total,
        extra_guests: extra.extra_guests,
        extra_guest_charge: extra.charge,
        total,
        audit_steps: vec![nightly.audit_step, extra.audit_step, total_step],
    })
}
