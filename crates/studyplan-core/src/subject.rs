//! Subject records supplied by the caller.
//!
//! A subject is a course the student is working on. Its weight (1-5)
//! drives how much of the week it receives; its target hours are only
//! used when reporting.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest accepted subject weight.
pub const MIN_WEIGHT: u8 = 1;
/// Highest accepted subject weight.
pub const MAX_WEIGHT: u8 = 5;

/// A course or subject the student is studying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    /// Difficulty / importance, 1 (easy) to 5 (hard)
    pub weight: u8,
    /// Goal hours for the planning period
    #[serde(default)]
    pub target_hours: f64,
}

impl Subject {
    /// Create a validated subject.
    ///
    /// The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the weight is outside
    /// `1..=5` or the target hours are negative or not finite.
    pub fn new(
        name: impl Into<String>,
        weight: u8,
        target_hours: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(ValidationError::WeightOutOfRange { name, weight });
        }
        if !target_hours.is_finite() || target_hours < 0.0 {
            return Err(ValidationError::InvalidTargetHours {
                name,
                hours: target_hours,
            });
        }

        Ok(Self {
            name,
            weight,
            target_hours,
        })
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Check a subject list for case-insensitive duplicate names.
///
/// # Errors
///
/// Returns [`ValidationError::DuplicateSubject`] naming the second
/// occurrence of a repeated name.
pub fn validate_subjects(subjects: &[Subject]) -> Result<(), ValidationError> {
    for (i, subject) in subjects.iter().enumerate() {
        if subjects[..i].iter().any(|s| s.has_name(&subject.name)) {
            return Err(ValidationError::DuplicateSubject(subject.name.clone()));
        }
    }
    Ok(())
}
