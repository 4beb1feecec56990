//! Room availability checks.
//!
//! These functions answer "is this room free for these nights?" against the
//! snapshot of bookings they are given. They offer no staleness guarantee: a
//! caller that goes on to write a booking must repeat the check atomically
//! with the write (see [`crate::store::BookingStore`]).

use crate::models::{AuditStep, Booking, Room, StayInterval};

use super::{OverlapPolicy, stay_overlaps_booking};

/// The result of an availability check, including the audit step.
#[derive(Debug, Clone)]
pub struct AvailabilityResult {
    /// Whether the room is free for the whole stay.
    pub available: bool,
    /// Ids of the blocking bookings that overlap the stay, in input order.
    pub conflicting_booking_ids: Vec<String>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Returns the blocking bookings on `room_id` that overlap `candidate`.
///
/// Cancelled bookings and bookings on other rooms are skipped. A booking
/// whose id equals `exclude_booking_id` is skipped as well, which is how the
/// update flow keeps a booking from conflicting with itself.
pub fn find_conflicts<'a>(
    room_id: &str,
    candidate: &StayInterval,
    bookings: &'a [Booking],
    exclude_booking_id: Option<&str>,
    policy: OverlapPolicy,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| conflicts_with(b, room_id, candidate, exclude_booking_id, policy))
        .collect()
}

/// Whether `booking` holds any of `candidate`'s nights on `room_id`.
///
/// Shared by the boolean check and the conflict listing so both always agree.
fn conflicts_with(
    booking: &Booking,
    room_id: &str,
    candidate: &StayInterval,
    exclude_booking_id: Option<&str>,
    policy: OverlapPolicy,
) -> bool {
    booking.room_id == room_id
        && booking.is_blocking()
        && exclude_booking_id != Some(booking.id.as_str())
        && stay_overlaps_booking(candidate, booking, policy)
}

/// Whether `room_id` is free for `candidate` given `existing_bookings`.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{is_available, OverlapPolicy};
/// use stay_engine::models::{Booking, BookingStatus, StayInterval};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let existing = vec![Booking {
///     id: "bk_1".to_string(),
///     room_id: "R".to_string(),
///     check_in: d(10),
///     check_out: d(12),
///     status: BookingStatus::Confirmed,
///     guest_count: 2,
/// }];
///
/// let back_to_back = StayInterval::new(d(12), d(14)).unwrap();
/// assert!(is_available("R", &back_to_back, &existing, OverlapPolicy::HalfOpen));
/// assert!(!is_available("R", &back_to_back, &existing, OverlapPolicy::Closed));
///
/// let overlapping = StayInterval::new(d(11), d(13)).unwrap();
/// assert!(!is_available("R", &overlapping, &existing, OverlapPolicy::HalfOpen));
/// ```
pub fn is_available(
    room_id: &str,
    candidate: &StayInterval,
    existing_bookings: &[Booking],
    policy: OverlapPolicy,
) -> bool {
    is_available_excluding(room_id, candidate, existing_bookings, None, policy)
}

/// Like [`is_available`], ignoring the booking with id `exclude_booking_id`.
pub fn is_available_excluding(
    room_id: &str,
    candidate: &StayInterval,
    existing_bookings: &[Booking],
    exclude_booking_id: Option<&str>,
    policy: OverlapPolicy,
) -> bool {
    !existing_bookings
        .iter()
        .any(|b| conflicts_with(b, room_id, candidate, exclude_booking_id, policy))
}

/// Returns the rooms that can host `candidate`, in input order.
///
/// A room qualifies when its capacity is at least `min_capacity` (if given)
/// and it has no overlapping blocking booking in `all_bookings`. An empty
/// result means nothing is free; it is not an error.
pub fn filter_available_rooms<'a>(
    rooms: &'a [Room],
    candidate: &StayInterval,
    all_bookings: &[Booking],
    min_capacity: Option<u32>,
    policy: OverlapPolicy,
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| min_capacity.is_none_or(|min| room.capacity >= min))
        .filter(|room| is_available(&room.id, candidate, all_bookings, policy))
        .collect()
}

/// Checks availability and records the verdict as an audit step.
pub fn check_availability(
    room_id: &str,
    candidate: &StayInterval,
    existing_bookings: &[Booking],
    exclude_booking_id: Option<&str>,
    policy: OverlapPolicy,
    step_number: u32,
) -> AvailabilityResult {
    let conflicts = find_conflicts(
        room_id,
        candidate,
        existing_bookings,
        exclude_booking_id,
        policy,
    );
    let conflicting_booking_ids: Vec<String> = conflicts.iter().map(|b| b.id.clone()).collect();
    let available = conflicting_booking_ids.is_empty();

    let reasoning = if available {
        format!(
            "Room {} is free for {} ({} policy)",
            room_id, candidate, policy
        )
    } else {
        format!(
            "Room {} is blocked for {} by {} ({} policy)",
            room_id,
            candidate,
            conflicting_booking_ids.join(", "),
            policy
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "room_availability".to_string(),
        rule_name: "Room Availability".to_string(),
        input: serde_json::json!({
            "room_id": room_id,
            "check_in": candidate.check_in().to_string(),
            "check_out": candidate.check_out().to_string(),
            "overlap_policy": policy.to_string(),
            "excluded_booking_id": exclude_booking_id,
        }),
        output: serde_json::json!({
            "available": available,
            "conflicting_booking_ids": conflicting_booking_ids,
        }),
        reasoning,
    };

    AvailabilityResult {
        available,
        conflicting_booking_ids,
        audit_step,
    }
}
