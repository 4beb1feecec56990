//! Core data models for the stay engine.
//!
//! Rooms and bookings are owned by the calling layer; the engine only reads
//! them and returns derived values.

mod booking;
mod price_breakdown;
mod room;
mod stay_interval;

pub use booking::{Booking, BookingStatus};
pub use price_breakdown::{AuditStep, PriceBreakdown};
pub use room::{ExtraBed, Room};
pub use stay_interval::StayInterval;
