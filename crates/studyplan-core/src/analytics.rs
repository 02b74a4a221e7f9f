//! Target vs allocated analytics.
//!
//! Compares each subject's goal hours with the hours the scheduler was
//! able to place, and rolls the totals up into a completion percentage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Outcome for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubjectStatus {
    /// Allocation reached the target
    Met { surplus: f64 },
    /// Allocation fell short of the target
    Deficit { shortfall: f64 },
    /// No target, but some hours were placed
    Allocated,
    /// No target and no hours placed
    NotScheduled,
}

impl SubjectStatus {
    /// Classify allocated hours against a target.
    pub fn classify(target_hours: f64, allocated_hours: f64) -> Self {
        if target_hours > 0.0 {
            if allocated_hours >= target_hours {
                SubjectStatus::Met {
                    surplus: allocated_hours - target_hours,
                }
            } else {
                SubjectStatus::Deficit {
                    shortfall: target_hours - allocated_hours,
                }
            }
        } else if allocated_hours > 0.0 {
            SubjectStatus::Allocated
        } else {
            SubjectStatus::NotScheduled
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, SubjectStatus::Met { .. })
    }
}

impl fmt::Display for SubjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectStatus::Met { surplus } => write!(f, "MET (+{surplus:.1}h)"),
            SubjectStatus::Deficit { shortfall } => write!(f, "DEFICIT (-{shortfall:.1}h)"),
            SubjectStatus::Allocated => f.write_str("Allocated"),
            SubjectStatus::NotScheduled => f.write_str("Not Scheduled"),
        }
    }
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub name: String,
    pub target_hours: f64,
    pub allocated_hours: f64,
    pub status: SubjectStatus,
}

/// Per-subject rows plus totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub rows: Vec<AnalyticsRow>,
    pub total_target: f64,
    pub total_allocated: f64,
    /// `total_allocated / total_target * 100`, absent when there is no target
    pub completion_percentage: Option<f64>,
}

impl AnalyticsReport {
    /// Rows that fell short of their target
    pub fn deficits(&self) -> impl Iterator<Item = &AnalyticsRow> {
        self.rows
            .iter()
            .filter(|r| matches!(r.status, SubjectStatus::Deficit { .. }))
    }
}

/// Builds target vs allocated reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsReporter;

impl AnalyticsReporter {
    pub fn new() -> Self {
        Self
    }

    /// Build a report in subject order.
    ///
    /// Subjects missing from `allocated` count as zero hours. Entries in
    /// `allocated` with no matching subject are ignored.
    pub fn report(
        &self,
        subjects: &[Subject],
        allocated: &BTreeMap<String, f64>,
    ) -> AnalyticsReport {
        let rows: Vec<AnalyticsRow> = subjects
            .iter()
            .map(|subject| {
                let allocated_hours = allocated.get(&subject.name).copied().unwrap_or(0.0);
                AnalyticsRow {
                    name: subject.name.clone(),
                    target_hours: subject.target_hours,
                    allocated_hours,
                    status: SubjectStatus::classify(subject.target_hours, allocated_hours),
                }
            })
            .collect();

        let total_target: f64 = subjects.iter().map(|s| s.target_hours).sum();
        let total_allocated: f64 = rows.iter().map(|r| r.allocated_hours).sum();
        let completion_percentage =
            (total_target > 0.0).then(|| total_allocated / total_target * 100.0);

        AnalyticsReport {
            rows,
            total_target,
            total_allocated,
            completion_percentage,
        }
    }
}
