//! Configuration types for the stay engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_OVERLAP_POLICY, OverlapPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{ExtraBed, Room};

/// Guests covered by the nightly rate before extra beds are charged.
pub const DEFAULT_BASE_OCCUPANCY: u32 = 2;

/// Decimal places of the smallest currency unit.
pub const DEFAULT_CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Longest stay, in nights, accepted for search, quotes and bookings.
pub const DEFAULT_MAX_STAY_NIGHTS: u32 = 365;

/// A fixed per-night surcharge applied to nights falling on a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySurcharge {
    /// The weekday of the night (e.g. "Fri").
    pub weekday: Weekday,
    /// The amount added to that night's price.
    pub amount: Decimal,
}

/// Rules the price calculator applies on top of a room's nightly rate.
///
/// # Example
///
/// ```
/// use stay_engine::config::PricingRules;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let rules = PricingRules::default();
/// assert_eq!(rules.base_occupancy, 2);
/// assert_eq!(rules.surcharge_for(Weekday::Fri), Decimal::new(100, 0));
/// assert_eq!(rules.surcharge_for(Weekday::Sat), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Guests included in the nightly rate.
    #[serde(default = "default_base_occupancy")]
    pub base_occupancy: u32,
    /// Decimal places amounts are rounded to.
    #[serde(default = "default_currency_decimal_places")]
    pub currency_decimal_places: u32,
    /// Per-weekday surcharges.
    #[serde(default = "default_weekday_surcharges")]
    pub weekday_surcharges: Vec<WeekdaySurcharge>,
}

fn default_base_occupancy() -> u32 {
    DEFAULT_BASE_OCCUPANCY
}

fn default_currency_decimal_places() -> u32 {
    DEFAULT_CURRENCY_DECIMAL_PLACES
}

fn default_weekday_surcharges() -> Vec<WeekdaySurcharge> {
    vec![WeekdaySurcharge {
        weekday: Weekday::Fri,
        amount: Decimal::ONE_HUNDRED,
    }]
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            base_occupancy: DEFAULT_BASE_OCCUPANCY,
            currency_decimal_places: DEFAULT_CURRENCY_DECIMAL_PLACES,
            weekday_surcharges: default_weekday_surcharges(),
        }
    }
}

impl PricingRules {
    /// Total surcharge for a night on `weekday`. Zero when none is configured.
    pub fn surcharge_for(&self, weekday: Weekday) -> Decimal {
        self.weekday_surcharges
            .iter()
            .filter(|s| s.weekday == weekday)
            .map(|s| s.amount)
            .sum()
    }
}

/// Availability settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySettings {
    /// How stay boundaries are compared.
    #[serde(default = "default_overlap_policy")]
    pub overlap_policy: OverlapPolicy,
    /// Longest stay accepted, in nights.
    #[serde(default = "default_max_stay_nights")]
    pub max_stay_nights: u32,
}

fn default_overlap_policy() -> OverlapPolicy {
    DEFAULT_OVERLAP_POLICY
}

fn default_max_stay_nights() -> u32 {
    DEFAULT_MAX_STAY_NIGHTS
}

impl Default for AvailabilitySettings {
    fn default() -> Self {
        Self {
            overlap_policy: DEFAULT_OVERLAP_POLICY,
            max_stay_nights: DEFAULT_MAX_STAY_NIGHTS,
        }
    }
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// ISO currency code prices are quoted in.
    pub currency: String,
    /// Availability settings.
    #[serde(default)]
    pub availability: AvailabilitySettings,
    /// Pricing rules.
    #[serde(default)]
    pub pricing: PricingRules,
}

/// Extra bed entry in `rooms.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraBedRecord {
    /// Whether extra beds can be added.
    pub available: bool,
    /// Maximum number of extra beds.
    #[serde(default)]
    pub max_count: u32,
    /// Charge per extra bed per night.
    #[serde(default)]
    pub price_per_night: Option<Decimal>,
}

/// Room entry in `rooms.yaml`.
///
/// Prices are optional here so that an incomplete catalogue entry is reported
/// as [`EngineError::MissingPriceData`] instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    /// Unique identifier for the room.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Nightly rate.
    #[serde(default)]
    pub price_per_night: Option<Decimal>,
    /// Extra bed options.
    #[serde(default)]
    pub extra_bed: Option<ExtraBedRecord>,
}

impl RoomRecord {
    /// Converts the record into a [`Room`], failing on missing or negative prices.
    pub fn into_room(self) -> EngineResult<Room> {
        let price_per_night = self
            .price_per_night
            .ok_or_else(|| EngineError::MissingPriceData {
                room_id: self.id.clone(),
                field: "price_per_night".to_string(),
            })?;

        let extra_bed = match self.extra_bed {
            None => ExtraBed::default(),
            Some(bed) if !bed.available => ExtraBed {
                available: false,
                max_count: bed.max_count,
                price_per_night: bed.price_per_night.unwrap_or(Decimal::ZERO),
            },
            Some(bed) => ExtraBed {
                available: true,
                max_count: bed.max_count,
                price_per_night: bed.price_per_night.ok_or_else(|| {
                    EngineError::MissingPriceData {
                        room_id: self.id.clone(),
                        field: "extra_bed.price_per_night".to_string(),
                    }
                })?,
            },
        };

        let room = Room {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            price_per_night,
            extra_bed,
        };
        room.validate_prices()?;
        Ok(room)
    }
}

/// Contents of `rooms.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsConfig {
    /// Room entries in catalogue order.
    pub rooms: Vec<RoomRecord>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StayConfig {
    /// Engine settings.
    settings: EngineSettings,
    /// Room catalogue, in file order.
    rooms: Vec<Room>,
}

impl StayConfig {
    /// Creates a new StayConfig from its component parts.
    pub fn new(settings: EngineSettings, rooms: Vec<Room>) -> Self {
        Self { settings, rooms }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the pricing rules.
    pub fn pricing(&self) -> &PricingRules {
        &self.settings.pricing
    }

    /// Returns the configured overlap policy.
    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.settings.availability.overlap_policy
    }

    /// Returns the longest stay accepted, in nights.
    pub fn max_stay_nights(&self) -> u32 {
        self.settings.availability.max_stay_nights
    }

    /// Returns the room catalogue.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
