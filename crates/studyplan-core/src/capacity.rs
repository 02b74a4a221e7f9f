//! Weekly study capacity.
//!
//! Capacity is a fixed 7-slot cycle, Monday first. There is no date
//! arithmetic: slot `i` is simply the `i`th day of the planning week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of slots in the weekly cycle.
pub const DAYS_PER_WEEK: usize = 7;

/// Upper bound on hours in a single slot.
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday label for a slot index (0 = Monday).
pub fn weekday(day: usize) -> Option<Weekday> {
    WEEK.get(day).copied()
}

/// Hours available per day, up to seven entries.
///
/// Fewer than seven entries is allowed; trailing days then receive no
/// study time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CapacityVector(Vec<f64>);

impl CapacityVector {
    /// Create a validated capacity vector.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more than seven entries or if any
    /// entry is outside `[0, 24]`.
    pub fn new(hours: Vec<f64>) -> Result<Self, ValidationError> {
        if hours.len() > DAYS_PER_WEEK {
            return Err(ValidationError::TooManyDays {
                len: hours.len(),
                max: DAYS_PER_WEEK,
            });
        }
        for (day, &h) in hours.iter().enumerate() {
            if !h.is_finite() || !(0.0..=MAX_HOURS_PER_DAY).contains(&h) {
                return Err(ValidationError::CapacityOutOfRange { day, hours: h });
            }
        }
        Ok(Self(hours))
    }

    /// Capacity with no study time on any day.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Hours available on `day`, zero past the end of the vector.
    pub fn hours(&self, day: usize) -> f64 {
        self.0.get(day).copied().unwrap_or(0.0)
    }

    /// Total hours across the week.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for CapacityVector {
    type Error = ValidationError;

    fn try_from(hours: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<CapacityVector> for Vec<f64> {
    fn from(capacity: CapacityVector) -> Self {
        capacity.0
    }
}
