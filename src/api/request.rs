//! Request types for the stay engine API.
//!
//! Dates arrive as plain `YYYY-MM-DD` calendar days. Ranges are validated
//! after parsing so that a reversed range is reported as `INVALID_RANGE`
//! rather than as malformed JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{BookingStatus, StayInterval};
use crate::store::{BookingChanges, NewBooking};

/// Request body for `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// First night.
    pub check_in: NaiveDate,
    /// Departure day.
    pub check_out: NaiveDate,
    /// Party size.
    pub guests: u32,
}

impl SearchRequest {
    /// The requested nights.
    pub fn stay(&self) -> EngineResult<StayInterval> {
        StayInterval::new(self.check_in, self.check_out)
    }
}

/// Request body for `POST /quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The room to price.
    pub room_id: String,
    /// First night.
    pub check_in: NaiveDate,
    /// Departure day.
    pub check_out: NaiveDate,
    /// Party size.
    pub guests: u32,
}

impl QuoteRequest {
    /// The requested nights.
    pub fn stay(&self) -> EngineResult<StayInterval> {
        StayInterval::new(self.check_in, self.check_out)
    }
}

/// Request body for `POST /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The room to check.
    pub room_id: String,
    /// First night.
    pub check_in: NaiveDate,
    /// Departure day.
    pub check_out: NaiveDate,
    /// A booking to leave out of the check, e.g. the one being edited.
    #[serde(default)]
    pub exclude_booking_id: Option<String>,
}

impl AvailabilityRequest {
    /// The requested nights.
    pub fn stay(&self) -> EngineResult<StayInterval> {
        StayInterval::new(self.check_in, self.check_out)
    }
}

/// Request body for `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: String,
    /// First night.
    pub check_in: NaiveDate,
    /// Departure day.
    pub check_out: NaiveDate,
    /// Party size.
    pub guests: u32,
}

impl CreateBookingRequest {
    /// Converts the request into a validated [`NewBooking`].
    pub fn into_new_booking(self) -> EngineResult<NewBooking> {
        Ok(NewBooking {
            stay: StayInterval::new(self.check_in, self.check_out)?,
            room_id: self.room_id,
            guest_count: self.guests,
        })
    }
}

/// Request body for `PUT /bookings/:id`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// New first night.
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    /// New departure day.
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    /// New party size.
    #[serde(default)]
    pub guests: Option<u32>,
}

impl From<UpdateBookingRequest> for BookingChanges {
    fn from(req: UpdateBookingRequest) -> Self {
        BookingChanges {
            check_in: req.check_in,
            check_out: req.check_out,
            guest_count: req.guests,
        }
    }
}

/// Request body for `POST /bookings/:id/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// The status to move to.
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_search_request_deserialization() {
        let json = r#"{"check_in": "2025-06-10", "check_out": "2025-06-12", "guests": 2}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.guests, 2);
        assert_eq!(req.stay().unwrap().nights(), 2);
    }

    #[test]
    fn test_reversed_range_parses_but_fails_validation() {
        let json = r#"{"room_id": "101", "check_in": "2025-06-12", "check_out": "2025-06-10", "guests": 2}"#;
        let req: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(req.stay(), Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_create_request_into_new_booking() {
        let req = CreateBookingRequest {
            room_id: "101".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            guests: 2,
        };
        let booking = req.into_new_booking().unwrap();
        assert_eq!(booking.room_id, "101");
        assert_eq!(booking.guest_count, 2);
        assert_eq!(booking.stay.nights(), 2);
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateBookingRequest = serde_json::from_str("{}").unwrap();
        let changes: BookingChanges = req.into();
        assert!(changes.check_in.is_none());
        assert!(changes.check_out.is_none());
        assert!(changes.guest_count.is_none());
    }

    #[test]
    fn test_status_change_request() {
        let req: StatusChangeRequest = serde_json::from_str(r#"{"status": "checked_in"}"#).unwrap();
        assert_eq!(req.status, BookingStatus::CheckedIn);
    }
}
