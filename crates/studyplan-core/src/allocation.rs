//! Weighted allocation of study hours across subjects.
//!
//! The week's total capacity is divided between subjects in proportion to
//! their weight. Each subject's share is then cut into work items: whole
//! blocks first, followed by one fractional remainder.

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Kind of study session a work item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkKind {
    /// First whole block of a subject
    PriorityReview,
    /// Subsequent whole blocks
    Practice,
    /// Fractional remainder or sub-block allocation
    QuickReview,
}

impl WorkKind {
    /// Default topic text for this kind of session
    pub fn label(&self) -> &'static str {
        match self {
            WorkKind::PriorityReview => "High-priority concept review",
            WorkKind::Practice => "Practice problems and exercises",
            WorkKind::QuickReview => "Quick review/Problem set",
        }
    }
}

/// A unit of study work for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub subject: String,
    pub kind: WorkKind,
    /// Topic text, possibly annotated with a recommendation
    pub topic: String,
    pub hours: f64,
}

impl WorkItem {
    pub fn new(subject: impl Into<String>, kind: WorkKind, hours: f64) -> Self {
        Self {
            subject: subject.into(),
            kind,
            topic: kind.label().to_string(),
            hours,
        }
    }
}

/// Hours given to one subject before splitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAllocation {
    pub subject: String,
    pub hours: f64,
}

/// Allocation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Size of a whole work block (hours)
    #[serde(default = "default_block_hours")]
    pub block_hours: f64,
    /// Allocations and remainders at or below this are dropped (hours)
    #[serde(default = "default_min_allocation_hours")]
    pub min_allocation_hours: f64,
}

fn default_block_hours() -> f64 {
    1.0
}
fn default_min_allocation_hours() -> f64 {
    0.01
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            block_hours: default_block_hours(),
            min_allocation_hours: default_min_allocation_hours(),
        }
    }
}

/// Proportional hour allocator.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    config: AllocationConfig,
}

impl AllocationEngine {
    /// Create an engine with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Split `total_hours` between subjects in proportion to weight.
    ///
    /// Results follow input order. When every weight is zero the hours
    /// are split evenly. An empty subject list or non-positive total
    /// yields an empty vector.
    pub fn allocate(&self, subjects: &[Subject], total_hours: f64) -> Vec<SubjectAllocation> {
        if subjects.is_empty() || total_hours.is_nan() || total_hours <= 0.0 {
            return Vec::new();
        }

        let total_weight: u32 = subjects.iter().map(|s| u32::from(s.weight)).sum();

        subjects
            .iter()
            .map(|subject| {
                let hours = if total_weight == 0 {
                    total_hours / subjects.len() as f64
                } else {
                    total_hours * (f64::from(subject.weight) / f64::from(total_weight))
                };
                SubjectAllocation {
                    subject: subject.name.clone(),
                    hours,
                }
            })
            .collect()
    }

    /// Build the ordered work-item list for a planning run.
    ///
    /// Items are sorted by subject name. The sort is stable, so each
    /// subject keeps its review, practice, remainder order.
    pub fn work_items(&self, subjects: &[Subject], total_hours: f64) -> Vec<WorkItem> {
        let mut items: Vec<WorkItem> = self
            .allocate(subjects, total_hours)
            .iter()
            .flat_map(|allocation| self.split(allocation))
            .collect();

        items.sort_by(|a, b| a.subject.cmp(&b.subject));

        tracing::debug!(
            subjects = subjects.len(),
            total_hours,
            items = items.len(),
            "allocated study hours"
        );

        items
    }

    /// Cut one subject's allocation into whole blocks plus a remainder.
    fn split(&self, allocation: &SubjectAllocation) -> Vec<WorkItem> {
        let block = self.config.block_hours;
        let threshold = self.config.min_allocation_hours;
        let hours = allocation.hours;

        if hours >= block {
            let blocks = (hours / block).floor() as usize;
            let remainder = hours - blocks as f64 * block;

            let mut items: Vec<WorkItem> = (0..blocks)
                .map(|i| {
                    let kind = if i == 0 {
                        WorkKind::PriorityReview
                    } else {
                        WorkKind::Practice
                    };
                    WorkItem::new(allocation.subject.clone(), kind, block)
                })
                .collect();

            if remainder > threshold {
                items.push(WorkItem::new(
                    allocation.subject.clone(),
                    WorkKind::QuickReview,
                    remainder,
                ));
            }
            items
        } else if hours > threshold {
            vec![WorkItem::new(
                allocation.subject.clone(),
                WorkKind::QuickReview,
                hours,
            )]
        } else {
            Vec::new()
        }
    }
}
