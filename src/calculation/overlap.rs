//! Date-range overlap rules.
//!
//! Two policies exist for comparing stay boundaries. Under
//! [`OverlapPolicy::HalfOpen`] a stay occupies `[check_in, check_out)`, so a
//! guest may arrive on the day another leaves. Under [`OverlapPolicy::Closed`]
//! both boundary days are treated as occupied and same-day turnover is a
//! conflict.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, StayInterval};

/// How stay boundaries are compared when looking for conflicts.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{DEFAULT_OVERLAP_POLICY, OverlapPolicy};
///
/// assert_eq!(DEFAULT_OVERLAP_POLICY, OverlapPolicy::HalfOpen);
/// assert_eq!(OverlapPolicy::Closed.to_string(), "closed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// `[check_in, check_out)`: the check-out day is free for a new arrival.
    HalfOpen,
    /// `[check_in, check_out]`: the check-out day stays blocked.
    Closed,
}

/// The policy used unless configuration says otherwise.
pub const DEFAULT_OVERLAP_POLICY: OverlapPolicy = OverlapPolicy::HalfOpen;

impl Default for OverlapPolicy {
    fn default() -> Self {
        DEFAULT_OVERLAP_POLICY
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::HalfOpen => write!(f, "half_open"),
            OverlapPolicy::Closed => write!(f, "closed"),
        }
    }
}

/// Whether two date ranges overlap under `policy`.
///
/// Arguments are `(a_start, a_end)` and `(b_start, b_end)`.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::{dates_overlap, OverlapPolicy};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
///
/// // Back-to-back: one stay leaves on the 12th, the next arrives on the 12th.
/// assert!(!dates_overlap((d(10), d(12)), (d(12), d(14)), OverlapPolicy::HalfOpen));
/// assert!(dates_overlap((d(10), d(12)), (d(12), d(14)), OverlapPolicy::Closed));
/// ```
pub fn dates_overlap(
    a: (NaiveDate, NaiveDate),
    b: (NaiveDate, NaiveDate),
    policy: OverlapPolicy,
) -> bool {
    let (a_start, a_end) = a;
    let (b_start, b_end) = b;
    match policy {
        OverlapPolicy::HalfOpen => a_start < b_end && b_start < a_end,
        OverlapPolicy::Closed => a_start <= b_end && b_start <= a_end,
    }
}

/// Whether `candidate` overlaps the nights held by `booking`.
///
/// The booking's status is not considered here.
pub fn stay_overlaps_booking(
    candidate: &StayInterval,
    booking: &Booking,
    policy: OverlapPolicy,
) -> bool {
    dates_overlap(
        (candidate.check_in(), candidate.check_out()),
        (booking.check_in, booking.check_out),
        policy,
    )
}
