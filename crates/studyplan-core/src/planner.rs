//! End-to-end planning pipeline.
//!
//! Runs allocation, annotation, scheduling and reporting in sequence with
//! one [`PlannerConfig`]. Each call builds all of its working state from
//! scratch, so planners can be reused freely.

use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationEngine, WorkItem};
use crate::analytics::{AnalyticsReport, AnalyticsReporter};
use crate::capacity::CapacityVector;
use crate::config::PlannerConfig;
use crate::recommendation::{RecommendationAnnotator, RecommendationTable};
use crate::scheduler::{DayScheduler, Schedule};
use crate::subject::Subject;

/// Everything a planning run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Annotated work items in scheduling order
    pub work_items: Vec<WorkItem>,
    pub schedule: Schedule,
    pub report: AnalyticsReport,
}

impl StudyPlan {
    /// True when there was nothing to plan (no subjects or no capacity)
    pub fn is_empty(&self) -> bool {
        self.work_items.is_empty()
    }
}

/// Weekly study planner.
#[derive(Debug, Clone)]
pub struct StudyPlanner {
    allocation: AllocationEngine,
    annotator: RecommendationAnnotator,
    scheduler: DayScheduler,
    reporter: AnalyticsReporter,
}

impl StudyPlanner {
    /// Create a planner with the default config
    pub fn new() -> Self {
        Self::with_config(&PlannerConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: &PlannerConfig) -> Self {
        Self {
            allocation: AllocationEngine::with_config(config.allocation.clone()),
            annotator: RecommendationAnnotator::with_table(RecommendationTable::from_config(
                &config.recommendations,
            )),
            scheduler: DayScheduler::with_config(config.scheduler.clone()),
            reporter: AnalyticsReporter::new(),
        }
    }

    /// Plan a week of study.
    ///
    /// Input is assumed validated (see [`Subject::new`] and
    /// [`CapacityVector::new`]). Degenerate input yields an empty plan
    /// whose report still lists every subject.
    pub fn plan(&self, subjects: &[Subject], capacity: &CapacityVector) -> StudyPlan {
        let mut work_items = self.allocation.work_items(subjects, capacity.total());
        self.annotator.annotate(&mut work_items);

        let schedule = self.scheduler.schedule(&work_items, capacity.as_slice());
        let report = self.reporter.report(subjects, &schedule.allocated);

        tracing::debug!(
            items = work_items.len(),
            scheduled_hours = schedule.total_allocated(),
            "planning run complete"
        );

        StudyPlan {
            work_items,
            schedule,
            report,
        }
    }
}

impl Default for StudyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
