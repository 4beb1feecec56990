//! Booking model and status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The lifecycle state of a booking.
///
/// Staff move bookings through
/// `pending | confirmed -> checked_in -> checked_out`; any non-terminal state
/// may be cancelled, and a confirmed booking may become a no-show.
///
/// # Example
///
/// ```
/// use stay_engine::models::BookingStatus;
///
/// assert!(BookingStatus::Confirmed.is_blocking());
/// assert!(!BookingStatus::Cancelled.is_blocking());
/// assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedIn));
/// assert!(!BookingStatus::CheckedOut.can_transition_to(BookingStatus::Cancelled));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created but not yet confirmed by staff or payment.
    Pending,
    /// Confirmed and awaiting arrival.
    Confirmed,
    /// Guest is in the room.
    CheckedIn,
    /// Guest has left.
    CheckedOut,
    /// Cancelled; never blocks the room.
    Cancelled,
    /// Guest did not arrive.
    NoShow,
}

impl BookingStatus {
    /// Whether a booking in this status occupies the room for conflict checks.
    ///
    /// Only cancelled bookings release their nights.
    pub fn is_blocking(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BookingStatus::CheckedOut | BookingStatus::Cancelled | BookingStatus::NoShow
        )
    }

    /// Whether staff may move a booking from `self` to `next`.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;

        if self.is_terminal() {
            return false;
        }
        match (self, next) {
            (_, Cancelled) => true,
            (Pending, Confirmed) => true,
            (Pending | Confirmed, CheckedIn) => true,
            (CheckedIn, CheckedOut) => true,
            (Confirmed, NoShow) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::CheckedIn => write!(f, "checked_in"),
            BookingStatus::CheckedOut => write!(f, "checked_out"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// An existing reservation of a room, as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: String,
    /// The room this booking occupies.
    pub room_id: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure day.
    pub check_out: NaiveDate,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Number of guests on the booking.
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
}

fn default_guest_count() -> u32 {
    1
}

impl Booking {
    /// Whether this booking counts toward conflicts.
    pub fn is_blocking(&self) -> bool {
        self.status.is_blocking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_booking(status: BookingStatus) -> Booking {
        Booking {
            id: "bk_001".to_string(),
            room_id: "101".to_string(),
            check_in: make_date("2025-06-10"),
            check_out: make_date("2025-06-12"),
            status,
            guest_count: 2,
        }
    }

    #[test]
    fn test_only_cancelled_is_non_blocking() {
        use BookingStatus::*;
        for status in [Pending, Confirmed, CheckedIn, CheckedOut, NoShow] {
            assert!(create_booking(status).is_blocking(), "{} should block", status);
        }
        assert!(!create_booking(Cancelled).is_blocking());
    }

    #[test]
    fn test_happy_path_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(CheckedIn));
        assert!(Pending.can_transition_to(CheckedIn));
        assert!(CheckedIn.can_transition_to(CheckedOut));
        assert!(Confirmed.can_transition_to(NoShow));
    }

    #[test]
    fn test_any_non_terminal_state_can_cancel() {
        use BookingStatus::*;
        for status in [Pending, Confirmed, CheckedIn] {
            assert!(status.can_transition_to(Cancelled));
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        use BookingStatus::*;
        for from in [CheckedOut, Cancelled, NoShow] {
            for to in [Pending, Confirmed, CheckedIn, CheckedOut, Cancelled, NoShow] {
                assert!(!from.can_transition_to(to), "{} -> {} allowed", from, to);
            }
        }
    }

    #[test]
    fn test_disallowed_transitions() {
        use BookingStatus::*;
        assert!(!Pending.can_transition_to(NoShow));
        assert!(!Pending.can_transition_to(CheckedOut));
        assert!(!CheckedIn.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Pending));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&BookingStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked_in\"");
        let status: BookingStatus = serde_json::from_str("\"no_show\"").unwrap();
        assert_eq!(status, BookingStatus::NoShow);
    }

    #[test]
    fn test_booking_deserialization_defaults_guest_count() {
        let json = r#"{
            "id": "bk_001",
            "room_id": "101",
            "check_in": "2025-06-10",
            "check_out": "2025-06-12",
            "status": "confirmed"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.guest_count, 1);
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }
}
