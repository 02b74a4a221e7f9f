//! # Study Planner Core Library
//!
//! This library provides the planning logic for a weekly study planner.
//! Subject management, persistence and user interaction live in the
//! calling application; this crate only turns plain input records into a
//! plan.
//!
//! ## Architecture
//!
//! - **Allocation**: splits the week's hours between subjects in
//!   proportion to their weight, then cuts each share into work items
//! - **Recommendations**: annotates each subject's first work item with a
//!   suggested resource
//! - **Scheduler**: packs work items into daily capacity, capping
//!   uninterrupted time on one subject
//! - **Analytics**: compares placed hours with each subject's target
//!
//! ## Key Components
//!
//! - [`StudyPlanner`]: Runs the whole pipeline
//! - [`AllocationEngine`]: Weighted hour allocation
//! - [`DayScheduler`]: Greedy day-by-day packing
//! - [`PlannerConfig`]: Policy configuration loaded from TOML

pub mod allocation;
pub mod analytics;
pub mod capacity;
pub mod config;
pub mod error;
pub mod planner;
pub mod recommendation;
pub mod scheduler;
pub mod subject;

pub use allocation::{AllocationConfig, AllocationEngine, SubjectAllocation, WorkItem, WorkKind};
pub use analytics::{AnalyticsReport, AnalyticsReporter, AnalyticsRow, SubjectStatus};
pub use capacity::{weekday, CapacityVector, DAYS_PER_WEEK};
pub use config::PlannerConfig;
pub use error::{ConfigError, CoreError, ValidationError};
pub use planner::{StudyPlan, StudyPlanner};
pub use recommendation::{RecommendationAnnotator, RecommendationTable, RecommendationsConfig};
pub use scheduler::{DayPlan, DayScheduler, Schedule, ScheduledTask, SchedulerConfig, WorkQueue};
pub use subject::{validate_subjects, Subject};
