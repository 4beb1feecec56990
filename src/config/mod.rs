//! Configuration loading and management for the stay engine.
//!
//! This module provides functionality to load engine settings (currency,
//! overlap policy, pricing rules) and the room catalogue from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use stay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Quoting in {}", config.currency());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AvailabilitySettings, DEFAULT_BASE_OCCUPANCY, DEFAULT_CURRENCY_DECIMAL_PLACES,
    DEFAULT_MAX_STAY_NIGHTS, EngineSettings, ExtraBedRecord, PricingRules, RoomRecord,
    RoomsConfig, StayConfig, WeekdaySurcharge,
};
