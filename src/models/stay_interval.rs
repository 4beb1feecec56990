//! Stay interval model.
//!
//! A [`StayInterval`] is the range of nights a guest occupies a room,
//! written as `[check_in, check_out)`: the check-out day itself is not a
//! night of the stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Raw check-in/check-out pair as it arrives over the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

/// A validated stay with at least one night.
///
/// The only way to obtain a `StayInterval` (including through serde) is
/// [`StayInterval::new`], so every value upholds `check_in < check_out`.
///
/// # Example
///
/// ```
/// use stay_engine::models::StayInterval;
/// use chrono::NaiveDate;
///
/// let stay = StayInterval::new(
///     NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(stay.nights(), 2);
///
/// // Zero-night stays are rejected.
/// let same_day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// assert!(StayInterval::new(same_day, same_day).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayDates")]
pub struct StayInterval {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<StayDates> for StayInterval {
    type Error = EngineError;

    fn try_from(dates: StayDates) -> EngineResult<Self> {
        StayInterval::new(dates.check_in, dates.check_out)
    }
}

impl StayInterval {
    /// Creates a stay interval, returning [`EngineError::InvalidRange`] unless
    /// `check_in` is strictly before `check_out`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> EngineResult<Self> {
        if check_in >= check_out {
            return Err(EngineError::InvalidRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// The first night of the stay.
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// The departure day. Not itself a night of the stay.
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights in the stay. Always at least one.
    pub fn nights(&self) -> u32 {
        // check_in < check_out is guaranteed, and NaiveDate spans fit in u32
        (self.check_out - self.check_in).num_days() as u32
    }

    /// Iterates over the date of each night, starting with check-in.
    ///
    /// # Example
    ///
    /// ```
    /// use stay_engine::models::StayInterval;
    /// use chrono::NaiveDate;
    ///
    /// let stay = StayInterval::new(
    ///     NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    /// )
    /// .unwrap();
    /// let nights: Vec<_> = stay.nights_iter().collect();
    /// assert_eq!(nights, vec![
    ///     NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
    /// ]);
    /// ```
    pub fn nights_iter(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.check_in.iter_days().take(self.nights() as usize)
    }

    /// Rejects stays longer than `max_nights`.
    ///
    /// Pricing does work per night, so callers facing untrusted input check
    /// this before quoting or booking.
    pub fn ensure_max_nights(&self, max_nights: u32) -> EngineResult<()> {
        let nights = (self.check_out - self.check_in).num_days();
        if nights > i64::from(max_nights) {
            return Err(EngineError::StayTooLong {
                check_in: self.check_in,
                check_out: self.check_out,
                max_nights,
            });
        }
        Ok(())
    }

    /// Rejects stays that begin before `today`.
    ///
    /// `today` is supplied by the caller so that the check is deterministic;
    /// arriving on `today` itself is allowed.
    pub fn ensure_bookable_from(&self, today: NaiveDate) -> EngineResult<()> {
        if self.check_in < today {
            return Err(EngineError::DateInPast {
                check_in: self.check_in,
                today,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for StayInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}
