//! Room model.
//!
//! Rooms are read-only inputs to both availability and pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Extra bed options for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraBed {
    /// Whether extra beds can be added to this room.
    pub available: bool,
    /// Maximum number of extra beds that fit.
    pub max_count: u32,
    /// Charge per extra bed per night.
    pub price_per_night: Decimal,
}

impl Default for ExtraBed {
    fn default() -> Self {
        Self {
            available: false,
            max_count: 0,
            price_per_night: Decimal::ZERO,
        }
    }
}

/// A bookable room.
///
/// `capacity` is the most guests the room accepts, extra beds included.
///
/// # Example
///
/// ```
/// use stay_engine::models::{ExtraBed, Room};
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "101".to_string(),
///     name: "Garden Double".to_string(),
///     capacity: 3,
///     price_per_night: Decimal::new(400, 0),
///     extra_bed: ExtraBed {
///         available: true,
///         max_count: 1,
///         price_per_night: Decimal::new(50, 0),
///     },
/// };
/// assert!(room.validate_prices().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Nightly rate before surcharges.
    pub price_per_night: Decimal,
    /// Extra bed options.
    #[serde(default)]
    pub extra_bed: ExtraBed,
}

impl Room {
    /// Checks that every price on the room is non-negative.
    pub fn validate_prices(&self) -> EngineResult<()> {
        if self.price_per_night.is_sign_negative() {
            return Err(self.negative_price("price_per_night", self.price_per_night));
        }
        if self.extra_bed.available && self.extra_bed.price_per_night.is_sign_negative() {
            return Err(self.negative_price(
                "extra_bed.price_per_night",
                self.extra_bed.price_per_night,
            ));
        }
        Ok(())
    }

    fn negative_price(&self, field: &str, value: Decimal) -> EngineError {
        EngineError::InvalidPrice {
            room_id: self.id.clone(),
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        }
    }
}
