//! Calculation logic for the stay engine.
//!
//! This module contains the pure functions behind every booking flow:
//! date-range overlap rules, room availability checks and filtering,
//! per-night pricing with weekday surcharges, the extra guest charge, and the
//! stay price that combines them.

mod availability;
mod extra_guest;
mod nightly_rate;
mod overlap;
mod rounding;
mod stay_price;

pub use availability::{
    AvailabilityResult, check_availability, filter_available_rooms, find_conflicts, is_available,
    is_available_excluding,
};
pub use extra_guest::{ExtraGuestResult, calculate_extra_guest_charge};
pub use nightly_rate::{NightlyRatesResult, calculate_nightly_prices};
pub use overlap::{DEFAULT_OVERLAP_POLICY, OverlapPolicy, dates_overlap, stay_overlaps_booking};
pub use rounding::round_money;
pub use stay_price::{calculate_stay_price, validate_guest_count};
