//! Error types for the stay engine.
//!
//! Validation failures, data-layer failures and booking conflicts all surface
//! as [`EngineError`]. A search that finds no free rooms is *not* an error; it
//! is an empty successful result.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::BookingStatus;

/// The main error type for the stay engine.
///
/// # Example
///
/// ```
/// use stay_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     check_in: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid stay range: check-in 2025-06-12 must be before check-out 2025-06-12"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The check-in date is not strictly before the check-out date.
    #[error("Invalid stay range: check-in {check_in} must be before check-out {check_out}")]
    InvalidRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },

    /// The stay has more nights than the configured maximum.
    #[error("Stay from {check_in} to {check_out} exceeds the maximum of {max_nights} nights")]
    StayTooLong {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
        /// The configured maximum.
        max_nights: u32,
    },

    /// The guest count is below one or above what the room accepts.
    #[error("Invalid guest count {guest_count}: {message}")]
    InvalidGuestCount {
        /// The guest count that was rejected.
        guest_count: u32,
        /// Why the guest count was rejected.
        message: String,
    },

    /// The requested room does not exist in the catalogue.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room identifier that was looked up.
        room_id: String,
    },

    /// The room record has no price for a field the calculation needs.
    #[error("Missing price data for room '{room_id}': {field}")]
    MissingPriceData {
        /// The room whose record is incomplete.
        room_id: String,
        /// The missing field.
        field: String,
    },

    /// A price on the room record is present but unusable.
    #[error("Invalid price for room '{room_id}' field '{field}': {message}")]
    InvalidPrice {
        /// The room whose record is invalid.
        room_id: String,
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The stay starts before the earliest bookable date.
    #[error("Check-in {check_in} is before the earliest bookable date {today}")]
    DateInPast {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The date the caller considers "today".
        today: NaiveDate,
    },

    /// No booking exists with the given identifier.
    #[error("Booking not found: {booking_id}")]
    BookingNotFound {
        /// The booking identifier that was looked up.
        booking_id: String,
    },

    /// The room already has a blocking booking overlapping the stay.
    #[error("Room '{room_id}' is not available from {check_in} to {check_out}")]
    RoomUnavailable {
        /// The room that was requested.
        room_id: String,
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
        /// The bookings that overlap the requested stay.
        conflicting_booking_ids: Vec<String>,
    },

    /// A booking status change that the lifecycle does not allow.
    #[error("Booking '{booking_id}' cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// The booking being changed.
        booking_id: String,
        /// The current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },

    /// The booking has reached a final status and can no longer be changed.
    #[error("Booking '{booking_id}' is {status} and can no longer be changed")]
    BookingNotEditable {
        /// The booking being changed.
        booking_id: String,
        /// Its current status.
        status: BookingStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = EngineError::InvalidRange {
            check_in: date("2025-06-14"),
            check_out: date("2025-06-12"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid stay range: check-in 2025-06-14 must be before check-out 2025-06-12"
        );
    }

    #[test]
    fn test_invalid_guest_count_displays_reason() {
        let error = EngineError::InvalidGuestCount {
            guest_count: 0,
            message: "at least one guest is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid guest count 0: at least one guest is required"
        );
    }

    #[test]
    fn test_missing_price_data_displays_room_and_field() {
        let error = EngineError::MissingPriceData {
            room_id: "101".to_string(),
            field: "price_per_night".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing price data for room '101': price_per_night"
        );
    }

    #[test]
    fn test_room_unavailable_displays_stay() {
        let error = EngineError::RoomUnavailable {
            room_id: "101".to_string(),
            check_in: date("2025-06-11"),
            check_out: date("2025-06-13"),
            conflicting_booking_ids: vec!["bk_1".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Room '101' is not available from 2025-06-11 to 2025-06-13"
        );
    }

    #[test]
    fn test_invalid_status_transition_displays_statuses() {
        let error = EngineError::InvalidStatusTransition {
            booking_id: "bk_1".to_string(),
            from: BookingStatus::CheckedOut,
            to: BookingStatus::Cancelled,
        };
        assert_eq!(
            error.to_string(),
            "Booking 'bk_1' cannot move from checked_out to cancelled"
        );
    }

    #[test]
    fn test_stay_too_long_displays_limit() {
        let error = EngineError::StayTooLong {
            check_in: date("2025-06-01"),
            check_out: date("2026-06-02"),
            max_nights: 365,
        };
        assert_eq!(
            error.to_string(),
            "Stay from 2025-06-01 to 2026-06-02 exceeds the maximum of 365 nights"
        );
    }

    #[test]
    fn test_booking_not_editable_displays_status() {
        let error = EngineError::BookingNotEditable {
            booking_id: "bk_1".to_string(),
            status: BookingStatus::Cancelled,
        };
        assert_eq!(
            error.to_string(),
            "Booking 'bk_1' is cancelled and can no longer be changed"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_room_not_found() -> EngineResult<()> {
            Err(EngineError::RoomNotFound {
                room_id: "999".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_room_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::RoomNotFound { .. })
        ));
    }
}
