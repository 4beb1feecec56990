//! In-memory booking store.
//!
//! The availability functions only judge the snapshot they are handed. The
//! store closes the gap between "checked" and "written": creation and updates
//! take the write lock, re-run the conflict check against the current
//! bookings, and write within the same critical section. Two overlapping
//! requests for the same room therefore cannot both succeed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_stay_price, find_conflicts};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Booking, BookingStatus, PriceBreakdown, StayInterval};

/// A booking together with the price it was accepted at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The booking itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// Price computed when the booking was created or last changed.
    pub total_price: Decimal,
}

/// A request to book a room.
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// The room to book.
    pub room_id: String,
    /// The nights to book.
    pub stay: StayInterval,
    /// Party size.
    pub guest_count: u32,
}

/// Changes to an existing booking. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct BookingChanges {
    /// New first night.
    pub check_in: Option<NaiveDate>,
    /// New departure day.
    pub check_out: Option<NaiveDate>,
    /// New party size.
    pub guest_count: Option<u32>,
}

/// Thread-safe in-memory booking store.
#[derive(Debug, Default)]
pub struct BookingStore {
    records: RwLock<Vec<BookingRecord>>,
}

impl BookingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records.
    pub fn with_records(records: Vec<BookingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns a copy of every booking, in insertion order.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.records
            .read()
            .await
            .iter()
            .map(|r| r.booking.clone())
            .collect()
    }

    /// Looks up a booking by id.
    pub async fn get(&self, booking_id: &str) -> EngineResult<BookingRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.booking.id == booking_id)
            .cloned()
            .ok_or_else(|| EngineError::BookingNotFound {
                booking_id: booking_id.to_string(),
            })
    }

    /// Validates, checks and prices a new booking, then stores it as confirmed.
    ///
    /// The conflict check runs under the write lock, so it sees every booking
    /// committed before this one.
    ///
    /// # Errors
    ///
    /// * [`EngineError::RoomNotFound`] for an unknown room
    /// * [`EngineError::StayTooLong`] when the stay exceeds the configured maximum
    /// * [`EngineError::DateInPast`] when check-in is before `today`
    /// * [`EngineError::InvalidGuestCount`] / [`EngineError::InvalidPrice`]
    ///   from pricing
    /// * [`EngineError::RoomUnavailable`] when the nights are taken
    pub async fn create(
        &self,
        request: NewBooking,
        config: &ConfigLoader,
        today: NaiveDate,
    ) -> EngineResult<(BookingRecord, PriceBreakdown)> {
        let room = config.get_room(&request.room_id)?;
        request.stay.ensure_max_nights(config.max_stay_nights())?;
        request.stay.ensure_bookable_from(today)?;
        let price = calculate_stay_price(room, &request.stay, request.guest_count, config.pricing())?;

        let mut records = self.records.write().await;
        let bookings: Vec<Booking> = records.iter().map(|r| r.booking.clone()).collect();
        let conflicts = find_conflicts(
            &room.id,
            &request.stay,
            &bookings,
            None,
            config.overlap_policy(),
        );
        if !conflicts.is_empty() {
            let conflicting_booking_ids: Vec<String> =
                conflicts.iter().map(|b| b.id.clone()).collect();
            warn!(
                room_id = %room.id,
                stay = %request.stay,
                conflicts = ?conflicting_booking_ids,
                "Rejected booking: room unavailable"
            );
            return Err(EngineError::RoomUnavailable {
                room_id: room.id.clone(),
                check_in: request.stay.check_in(),
                check_out: request.stay.check_out(),
                conflicting_booking_ids,
            });
        }

        let record = BookingRecord {
            booking: Booking {
                id: Uuid::new_v4().to_string(),
                room_id: room.id.clone(),
                check_in: request.stay.check_in(),
                check_out: request.stay.check_out(),
                status: BookingStatus::Confirmed,
                guest_count: request.guest_count,
            },
            total_price: price.total,
        };
        records.push(record.clone());

        info!(
            booking_id = %record.booking.id,
            room_id = %room.id,
            stay = %request.stay,
            total_price = %price.total,
            "Booking created"
        );

        Ok((record, price))
    }

    /// Applies date or guest changes to a booking, re-checking and re-pricing.
    ///
    /// Bookings in a final status (cancelled, checked out, no-show) are
    /// rejected with [`EngineError::BookingNotEditable`].
    ///
    /// The booking being edited is excluded from its own conflict check. A new
    /// check-in date must not be before `today`; keeping the current check-in
    /// is always allowed so that in-house guests can extend.
    pub async fn update(
        &self,
        booking_id: &str,
        changes: BookingChanges,
        config: &ConfigLoader,
        today: NaiveDate,
    ) -> EngineResult<(BookingRecord, PriceBreakdown)> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| r.booking.id == booking_id)
            .ok_or_else(|| EngineError::BookingNotFound {
                booking_id: booking_id.to_string(),
            })?;

        let current = records[index].booking.clone();
        if current.status.is_terminal() {
            return Err(EngineError::BookingNotEditable {
                booking_id: booking_id.to_string(),
                status: current.status,
            });
        }
        let room = config.get_room(&current.room_id)?;

        let check_in = changes.check_in.unwrap_or(current.check_in);
        let check_out = changes.check_out.unwrap_or(current.check_out);
        let guest_count = changes.guest_count.unwrap_or(current.guest_count);

        let stay = StayInterval::new(check_in, check_out)?;
        stay.ensure_max_nights(config.max_stay_nights())?;
        if check_in != current.check_in {
            stay.ensure_bookable_from(today)?;
        }
        let price = calculate_stay_price(room, &stay, guest_count, config.pricing())?;

        let bookings: Vec<Booking> = records.iter().map(|r| r.booking.clone()).collect();
        let conflicts = find_conflicts(
            &room.id,
            &stay,
            &bookings,
            Some(booking_id),
            config.overlap_policy(),
        );
        if !conflicts.is_empty() {
            let conflicting_booking_ids: Vec<String> =
                conflicts.iter().map(|b| b.id.clone()).collect();
            warn!(
                booking_id,
                room_id = %room.id,
                stay = %stay,
                conflicts = ?conflicting_booking_ids,
                "Rejected booking change: room unavailable"
            );
            return Err(EngineError::RoomUnavailable {
                room_id: room.id.clone(),
                check_in,
                check_out,
                conflicting_booking_ids,
            });
        }

        let record = &mut records[index];
        record.booking.check_in = check_in;
        record.booking.check_out = check_out;
        record.booking.guest_count = guest_count;
        record.total_price = price.total;

        info!(
            booking_id,
            stay = %stay,
            guest_count,
            total_price = %price.total,
            "Booking updated"
        );

        Ok((record.clone(), price))
    }

    /// Moves a booking to `next` if the lifecycle allows it.
    pub async fn transition(
        &self,
        booking_id: &str,
        next: BookingStatus,
    ) -> EngineResult<BookingRecord> {
        let mut records = self.records.write().await;

        let record = records
            .iter_mut()
            .find(|r| r.booking.id == booking_id)
            .ok_or_else(|| EngineError::BookingNotFound {
                booking_id: booking_id.to_string(),
            })?;

        let current = record.booking.status;
        if !current.can_transition_to(next) {
            return Err(EngineError::InvalidStatusTransition {
                booking_id: booking_id.to_string(),
                from: current,
                to: next,
            });
        }

        record.booking.status = next;
        info!(booking_id, from = %current, to = %next, "Booking status changed");

        Ok(record.clone())
    }
}
