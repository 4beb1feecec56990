//! Extra guest (extra bed) charge.
//!
//! Guests beyond the base occupancy are charged the room's extra bed rate for
//! every night of the stay, capped at the number of extra beds the room has.

use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::{AuditStep, Room};

use super::round_money;

/// The result of calculating the extra guest charge, including the audit step.
#[derive(Debug, Clone)]
pub struct ExtraGuestResult {
    /// Guests that are charged for an extra bed.
    pub extra_guests: u32,
    /// Charge for the whole stay.
    pub charge: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the extra bed charge for `guest_count` guests over `nights`.
///
/// No charge applies when the room has no extra beds or the party fits in the
/// base occupancy. Otherwise
/// `min(guest_count - base_occupancy, max_count) × extra bed rate × nights`.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::calculate_extra_guest_charge;
/// use stay_engine::config::PricingRules;
/// use stay_engine::models::{ExtraBed, Room};
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
///
/// let result = calculate_extra_guest_charge(&room, 3, 2, &PricingRules::default(), 2);
/// assert_eq!(result.extra_guests, 1);
/// assert_eq!(result.charge, Decimal::new(100, 0)); // 1 × 50 × 2
/// ```
pub fn calculate_extra_guest_charge(
    room: &Room,
    guest_count: u32,
    nights: u32,
    rules: &PricingRules,
    step_number: u32,
) -> ExtraGuestResult {
    let extra_bed = &room.extra_bed;
    let over_base = guest_count.saturating_sub(rules.base_occupancy);

    let extra_guests = if extra_bed.available {
        over_base.min(extra_bed.max_count)
    } else {
        0
    };

    let charge = round_money(
        Decimal::from(extra_guests) * extra_bed.price_per_night * Decimal::from(nights),
        rules.currency_decimal_places,
    );

    let reasoning = if !extra_bed.available {
        format!("Room {} has no extra beds, no extra guest charge", room.id)
    } else if over_base == 0 {
        format!(
            "{} guest(s) fit the base occupancy of {}, no extra guest charge",
            guest_count, rules.base_occupancy
        )
    } else {
        format!(
            "Extra guests: {} × {} × {} nights = {}",
            extra_guests,
            extra_bed.price_per_night.normalize(),
            nights,
            charge.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "extra_guest_charge".to_string(),
        rule_name: "Extra Guest Charge".to_string(),
        input: serde_json::json!({
            "room_id": room.id,
            "guest_count": guest_count,
            "base_occupancy": rules.base_occupancy,
            "nights": nights,
            "extra_bed_available": extra_bed.available,
            "extra_bed_max_count": extra_bed.max_count,
            "extra_bed_price_per_night": extra_bed.price_per_night.normalize().to_string(),
        }),
        output: serde_json::json!({
            "extra_guests": extra_guests,
            "charge": charge.normalize().to_string(),
        }),
        reasoning,
    };

    ExtraGuestResult {
        extra_guests,
        charge,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtraBed;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_room(available: bool, max_count: u32, bed_price: &str) -> Room {
        Room {
            id: "102".to_string(),
            name: "Garden Triple".to_string(),
            capacity: 2 + max_count,
            price_per_night: dec("400"),
            extra_bed: ExtraBed {
                available,
                max_count,
                price_per_night: dec(bed_price),
            },
        }
    }

    #[test]
    fn test_three_guests_one_extra_bed_two_nights() {
        let result =
            calculate_extra_guest_charge(&create_room(true, 1, "50"), 3, 2, &PricingRules::default(), 1);
        assert_eq!(result.extra_guests, 1);
        assert_eq!(result.charge, dec("100"));
    }

    #[test]
    fn test_extra_guests_capped_by_max_count() {
        let result =
            calculate_extra_guest_charge(&create_room(true, 2, "60"), 6, 3, &PricingRules::default(), 1);
        assert_eq!(result.extra_guests, 2);
        assert_eq!(result.charge, dec("360")); // 2 * 60 * 3
    }

    #[test]
    fn test_base_occupancy_party_pays_nothing() {
        for guests in [1, 2] {
            let result = calculate_extra_guest_charge(
                &create_room(true, 1, "50"),
                guests,
                2,
                &PricingRules::default(),
                1,
            );
            assert_eq!(result.extra_guests, 0);
            assert_eq!(result.charge, Decimal::ZERO);
            assert!(result.audit_step.reasoning.contains("base occupancy"));
        }
    }

    #[test]
    fn test_unavailable_extra_bed_pays_nothing() {
        let result =
            calculate_extra_guest_charge(&create_room(false, 1, "50"), 3, 2, &PricingRules::default(), 1);
        assert_eq!(result.extra_guests, 0);
        assert_eq!(result.charge, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("no extra beds"));
    }

    #[test]
    fn test_custom_base_occupancy() {
        let rules = PricingRules {
            base_occupancy: 1,
            ..PricingRules::default()
        };
        let result = calculate_extra_guest_charge(&create_room(true, 2, "50"), 2, 1, &rules, 1);
        assert_eq!(result.extra_guests, 1);
        assert_eq!(result.charge, dec("50"));
    }

    #[test]
    fn test_audit_step_contents() {
        let result =
            calculate_extra_guest_charge(&create_room(true, 1, "50"), 3, 2, &PricingRules::default(), 4);
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "extra_guest_charge");
        assert_eq!(result.audit_step.input["guest_count"], 3);
        assert_eq!(result.audit_step.output["extra_guests"], 1);
        assert_eq!(result.audit_step.output["charge"], "100");
    }
}
