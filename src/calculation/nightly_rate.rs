//! Per-night price accumulation.
//!
//! Each night of a stay is priced on its own: the room's nightly rate plus
//! any surcharge configured for that night's weekday.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::{AuditStep, Room, StayInterval};

use super::round_money;

/// The result of pricing each night of a stay.
#[derive(Debug, Clone)]
pub struct NightlyRatesResult {
    /// Price of each night in stay order.
    pub per_night_prices: Vec<Decimal>,
    /// Sum of `per_night_prices`.
    pub base_total: Decimal,
    /// Number of nights that carried a surcharge.
    pub surcharged_nights: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices every night of `stay` in `room`.
///
/// The night's weekday comes from its calendar date only. Each night is
/// rounded to the currency's minor unit before summing, so the total is the
/// exact sum of the listed nights.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::calculate_nightly_prices;
/// use stay_engine::config::PricingRules;
/// use stay_engine::models::{ExtraBed, Room, StayInterval};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "101".to_string(),
///     name: String::new(),
///     capacity: 2,
///     price_per_night: Decimal::new(400, 0),
///     extra_bed: ExtraBed::default(),
/// };
/// // Thursday, Friday, Saturday nights
/// let stay = StayInterval::new(
///     NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
/// )
/// .unwrap();
///
/// let result = calculate_nightly_prices(&room, &stay, &PricingRules::default(), 1);
/// assert_eq!(
///     result.per_night_prices,
///     vec![Decimal::new(400, 0), Decimal::new(500, 0), Decimal::new(400, 0)]
/// );
/// assert_eq!(result.base_total, Decimal::new(1300, 0));
/// ```
pub fn calculate_nightly_prices(
    room: &Room,
    stay: &StayInterval,
    rules: &PricingRules,
    step_number: u32,
) -> NightlyRatesResult {
    let mut per_night_prices = Vec::with_capacity(stay.nights() as usize);
    let mut nights_detail = Vec::with_capacity(stay.nights() as usize);
    let mut surcharged_nights = 0;

    for night in stay.nights_iter() {
        let weekday = night.weekday();
        let surcharge = rules.surcharge_for(weekday);
        if !surcharge.is_zero() {
            surcharged_nights += 1;
        }
        let price = round_money(
            room.price_per_night + surcharge,
            rules.currency_decimal_places,
        );
        per_night_prices.push(price);
        nights_detail.push(serde_json::json!({
            "date": night.to_string(),
            "weekday": weekday.to_string(),
            "surcharge": surcharge.normalize().to_string(),
            "price": price.normalize().to_string(),
        }));
    }

    let base_total: Decimal = per_night_prices.iter().copied().sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "nightly_rate".to_string(),
        rule_name: "Nightly Rate".to_string(),
        input: serde_json::json!({
            "room_id": room.id,
            "price_per_night": room.price_per_night.normalize().to_string(),
            "check_in": stay.check_in().to_string(),
            "check_out": stay.check_out().to_string(),
            "nights": stay.nights(),
        }),
        output: serde_json::json!({
            "nights": nights_detail,
            "base_total": base_total.normalize().to_string(),
        }),
        reasoning: format!(
            "{} nights × {} with {} surcharged night(s) = {}",
            stay.nights(),
            room.price_per_night.normalize(),
            surcharged_nights,
            base_total.normalize()
        ),
    };

    NightlyRatesResult {
        per_night_prices,
        base_total,
        surcharged_nights,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeekdaySurcharge;
    use crate::models::ExtraBed;
    use chrono::{NaiveDate, Weekday};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn stay(check_in: &str, check_out: &str) -> StayInterval {
        StayInterval::new(
            NaiveDate::parse_from_str(check_in, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(check_out, "%Y-%m-%d").unwrap(),
        )
        .unwrap()
    }

    fn create_room(price: &str) -> Room {
        Room {
            id: "101".to_string(),
            name: "Garden Double".to_string(),
            capacity: 2,
            price_per_night: dec(price),
            extra_bed: ExtraBed::default(),
        }
    }

    // 2025-06-13 is a Friday, 2025-06-14 a Saturday.

    #[test]
    fn test_single_friday_night_gets_surcharge() {
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-13", "2025-06-14"),
            &PricingRules::default(),
            1,
        );
        assert_eq!(result.per_night_prices, vec![dec("500")]);
        assert_eq!(result.base_total, dec("500"));
        assert_eq!(result.surcharged_nights, 1);
    }

    #[test]
    fn test_single_saturday_night_has_no_surcharge() {
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-14", "2025-06-15"),
            &PricingRules::default(),
            1,
        );
        assert_eq!(result.per_night_prices, vec![dec("400")]);
        assert_eq!(result.surcharged_nights, 0);
    }

    #[test]
    fn test_friday_as_checkout_day_is_not_charged() {
        // Wed and Thu nights; leaving Friday morning.
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-11", "2025-06-13"),
            &PricingRules::default(),
            1,
        );
        assert_eq!(result.per_night_prices, vec![dec("400"), dec("400")]);
    }

    #[test]
    fn test_two_week_stay_has_two_friday_surcharges() {
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-09", "2025-06-23"),
            &PricingRules::default(),
            1,
        );
        assert_eq!(result.per_night_prices.len(), 14);
        assert_eq!(result.surcharged_nights, 2);
        assert_eq!(result.base_total, dec("5800")); // 14 * 400 + 2 * 100
    }

    #[test]
    fn test_fractional_prices_sum_exactly() {
        let result = calculate_nightly_prices(
            &create_room("99.99"),
            &stay("2025-06-02", "2025-06-05"),
            &PricingRules::default(),
            1,
        );
        assert_eq!(result.base_total, dec("299.97"));
    }

    #[test]
    fn test_sub_cent_nightly_rate_is_rounded_per_night() {
        let result = calculate_nightly_prices(
            &create_room("100.005"),
            &stay("2025-06-02", "2025-06-04"),
            &PricingRules::default(),
            1,
        );
        // 100.005 rounds half-to-even to 100.00
        assert_eq!(result.per_night_prices, vec![dec("100.00"), dec("100.00")]);
        assert_eq!(result.base_total, dec("200.00"));
    }

    #[test]
    fn test_custom_weekend_surcharges() {
        let rules = PricingRules {
            weekday_surcharges: vec![
                WeekdaySurcharge {
                    weekday: Weekday::Sat,
                    amount: dec("80"),
                },
                WeekdaySurcharge {
                    weekday: Weekday::Sun,
                    amount: dec("40"),
                },
            ],
            ..PricingRules::default()
        };
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-13", "2025-06-16"),
            &rules,
            1,
        );
        assert_eq!(
            result.per_night_prices,
            vec![dec("400"), dec("480"), dec("440")]
        );
    }

    #[test]
    fn test_audit_step_lists_each_night() {
        let result = calculate_nightly_prices(
            &create_room("400"),
            &stay("2025-06-12", "2025-06-14"),
            &PricingRules::default(),
            2,
        );
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "nightly_rate");
        let nights = result.audit_step.output["nights"].as_array().unwrap();
        assert_eq!(nights.len(), 2);
        assert_eq!(nights[1]["weekday"], "Fri");
        assert_eq!(nights[1]["price"], "500");
        assert_eq!(result.audit_step.output["base_total"], "900");
        assert!(result.audit_step.reasoning.contains("900"));
    }
}
