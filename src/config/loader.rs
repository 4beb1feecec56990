//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and the room catalogue from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::OverlapPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::Room;

use super::types::{EngineSettings, PricingRules, RoomsConfig, StayConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Currency, overlap policy, pricing rules
/// └── rooms.yaml    # Room catalogue
/// ```
///
/// # Example
///
/// ```no_run
/// use stay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let room = loader.get_room("101").unwrap();
/// println!("{} sleeps {}", room.name, room.capacity);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or unparsable, if a room
    /// lacks price data, or if two rooms share an id.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;

        let rooms_path = path.join("rooms.yaml");
        let rooms_config = Self::load_yaml::<RoomsConfig>(&rooms_path)?;

        let mut seen = HashSet::new();
        let mut rooms = Vec::with_capacity(rooms_config.rooms.len());
        for record in rooms_config.rooms {
            if !seen.insert(record.id.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: rooms_path.display().to_string(),
                    message: format!("duplicate room id '{}'", record.id),
                });
            }
            rooms.push(record.into_room()?);
        }

        debug!(
            path = %path.display(),
            rooms = rooms.len(),
            overlap_policy = %settings.availability.overlap_policy,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: StayConfig::new(settings, rooms),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &StayConfig {
        &self.config
    }

    /// Returns the pricing rules.
    pub fn pricing(&self) -> &PricingRules {
        self.config.pricing()
    }

    /// Returns the configured overlap policy.
    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.config.overlap_policy()
    }

    /// Returns the longest stay accepted, in nights.
    pub fn max_stay_nights(&self) -> u32 {
        self.config.max_stay_nights()
    }

    /// Returns the currency code prices are quoted in.
    pub fn currency(&self) -> &str {
        &self.config.settings().currency
    }

    /// Returns the room catalogue in file order.
    pub fn rooms(&self) -> &[Room] {
        self.config.rooms()
    }

    /// Gets a room by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let room = loader.get_room("101")?;
    /// println!("Nightly rate: {}", room.price_per_night);
    /// # Ok::<(), stay_engine::error::EngineError>(())
    /// ```
    pub fn get_room(&self, room_id: &str) -> EngineResult<&Room> {
        self.config
            .rooms()
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    const CONFIG_PATH: &str = "./config/default";

    /// Writes a throwaway config directory under the system temp dir.
    fn write_config(name: &str, engine: &str, rooms: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stay_engine_{}_{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("engine.yaml"), engine).unwrap();
        fs::write(dir.join("rooms.yaml"), rooms).unwrap();
        dir
    }

    #[test]
    fn test_load_default_config() {
        let loader = ConfigLoader::load(CONFIG_PATH).expect("Failed to load config");
        assert_eq!(loader.currency(), "EUR");
        assert_eq!(loader.overlap_policy(), OverlapPolicy::HalfOpen);
        assert_eq!(loader.pricing().base_occupancy, 2);
        assert_eq!(loader.max_stay_nights(), 365);
        assert_eq!(
            loader.pricing().surcharge_for(Weekday::Fri),
            Decimal::new(100, 0)
        );
        assert!(!loader.rooms().is_empty());
    }

    #[test]
    fn test_rooms_keep_file_order() {
        let loader = ConfigLoader::load(CONFIG_PATH).unwrap();
        let ids: Vec<&str> = loader.rooms().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "102", "201", "202", "301"]);
    }

    #[test]
    fn test_get_room() {
        let loader = ConfigLoader::load(CONFIG_PATH).unwrap();
        let room = loader.get_room("102").unwrap();
        assert_eq!(room.capacity, 3);
        assert!(room.extra_bed.available);
    }

    #[test]
    fn test_get_unknown_room() {
        let loader = ConfigLoader::load(CONFIG_PATH).unwrap();
        let result = loader.get_room("999");
        assert!(matches!(
            result,
            Err(EngineError::RoomNotFound { room_id }) if room_id == "999"
        ));
    }

    #[test]
    fn test_missing_directory() {
        let result = ConfigLoader::load("./config/does_not_exist");
        match result {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("engine.yaml")),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = write_config("invalid", "currency: [unclosed", "rooms: []");
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_duplicate_room_ids() {
        let rooms = r#"
rooms:
  - id: '101'
    capacity: 2
    price_per_night: '400'
  - id: '101'
    capacity: 2
    price_per_night: '450'
"#;
        let dir = write_config("duplicate", "currency: EUR", rooms);
        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate room id '101'"))
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_room_missing_price_surfaces_as_missing_price_data() {
        let rooms = r#"
rooms:
  - id: '101'
    capacity: 2
"#;
        let dir = write_config("missing_price", "currency: EUR", rooms);
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::MissingPriceData { .. })));
        fs::remove_dir_all(dir).ok();
    }
}
