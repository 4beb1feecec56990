//! Application state for the stay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;
use crate::store::BookingStore;

/// Shared application state.
///
/// Holds the loaded configuration, the booking store, and the source of
/// "today" used for the earliest bookable date.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Bookings shared by every request.
    store: Arc<BookingStore>,
    /// Fixed "today"; the UTC calendar date is used when unset.
    today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with an empty booking store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(BookingStore::new()),
            today: None,
        }
    }

    /// Replaces the booking store.
    pub fn with_store(mut self, store: BookingStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Pins "today" to a fixed date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the booking store.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// The earliest date a stay may start on.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_fixed_today_is_used() {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let state = AppState::new(config).with_today(today);
        assert_eq!(state.today(), today);
    }
}
