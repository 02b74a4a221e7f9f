//! Day-by-day scheduler for study work items.
//!
//! This module packs the ordered work-item queue into the weekly capacity:
//! - Fills each day greedily from the front of the queue
//! - Splits items across days when a day runs out of hours
//! - Caps uninterrupted time on one subject within a day
//! - Detours to the next different subject when the cap is reached

mod queue;

pub use queue::WorkQueue;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::allocation::WorkItem;
use crate::capacity::DAYS_PER_WEEK;

/// One placement of study time on a specific day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub subject: String,
    pub topic: String,
    pub hours_allocated: f64,
}

impl fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Study {} for {:.2} hours.",
            self.subject, self.topic, self.hours_allocated
        )
    }
}

/// Tasks for each day of the weekly cycle, index 0 = Monday
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    days: [Vec<ScheduledTask>; DAYS_PER_WEEK],
}

impl DayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks scheduled on `day`, empty past the end of the week
    pub fn tasks(&self, day: usize) -> &[ScheduledTask] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Hours scheduled on `day`
    pub fn hours_on(&self, day: usize) -> f64 {
        self.tasks(day).iter().map(|t| t.hours_allocated).sum()
    }

    /// Hours scheduled across the week
    pub fn total_hours(&self) -> f64 {
        (0..DAYS_PER_WEEK).map(|day| self.hours_on(day)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Iterate `(day_index, tasks)` over all seven days
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ScheduledTask])> {
        self.days.iter().map(Vec::as_slice).enumerate()
    }
}

/// Output of a scheduling pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub plan: DayPlan,
    /// Hours placed per subject
    pub allocated: BTreeMap<String, f64>,
    /// Hours left in the queue per subject
    pub unplaced: BTreeMap<String, f64>,
}

impl Schedule {
    /// Hours placed for a subject, zero if it never appeared
    pub fn allocated_hours(&self, subject: &str) -> f64 {
        self.allocated.get(subject).copied().unwrap_or(0.0)
    }

    pub fn total_allocated(&self) -> f64 {
        self.allocated.values().sum()
    }
}

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Longest uninterrupted same-subject run within a day (hours)
    #[serde(default = "default_max_consecutive_hours")]
    pub max_consecutive_hours: f64,
    /// Remaining hours at or below this count as exhausted
    #[serde(default = "default_exhausted_epsilon")]
    pub exhausted_epsilon: f64,
    /// Advisory minimum placement (hours); shorter fragments are still placed
    #[serde(default = "default_min_task_hours")]
    pub min_task_hours: f64,
}

fn default_max_consecutive_hours() -> f64 {
    2.0
}
fn default_exhausted_epsilon() -> f64 {
    0.001
}
fn default_min_task_hours() -> f64 {
    0.25
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_consecutive_hours: default_max_consecutive_hours(),
            exhausted_epsilon: default_exhausted_epsilon(),
            min_task_hours: default_min_task_hours(),
        }
    }
}

/// Greedy weekly scheduler
#[derive(Debug, Clone, Default)]
pub struct DayScheduler {
    config: SchedulerConfig,
}

impl DayScheduler {
    /// Create a new scheduler with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedule work items into the weekly capacity.
    ///
    /// # Arguments
    /// * `items` - Ordered work items (sorted by subject)
    /// * `capacity` - Hours per day; entries past the seventh are ignored
    ///
    /// # Returns
    /// The day plan with per-subject placed and unplaced totals
    pub fn schedule(&self, items: &[WorkItem], capacity: &[f64]) -> Schedule {
        let mut queue = WorkQueue::from_items(items);
        let mut schedule = Schedule::default();

        for (day, &hours) in capacity.iter().enumerate().take(DAYS_PER_WEEK) {
            if hours <= 0.0 {
                continue;
            }
            let tasks = self.fill_day(&mut queue, hours, &mut schedule.allocated);
            tracing::debug!(
                day,
                capacity = hours,
                tasks = tasks.len(),
                "filled day"
            );
            schedule.plan.days[day] = tasks;
        }

        schedule.unplaced = queue.remaining_by_subject(self.config.exhausted_epsilon);
        schedule
    }

    /// Fill one day from the queue.
    ///
    /// The cursor restarts at the front of the queue each day; exhausted
    /// items are skipped cheaply. When the consecutive cap is hit the
    /// step is served from the next different subject while the cursor
    /// stays put, so the deferred item is picked up again right after.
    fn fill_day(
        &self,
        queue: &mut WorkQueue,
        capacity: f64,
        allocated: &mut BTreeMap<String, f64>,
    ) -> Vec<ScheduledTask> {
        let epsilon = self.config.exhausted_epsilon;
        let cap = self.config.max_consecutive_hours;

        let mut tasks = Vec::new();
        let mut cursor = 0;
        let mut hours_used = 0.0;
        let mut last_subject: Option<String> = None;
        let mut consecutive_hours = 0.0;

        while hours_used < capacity && cursor < queue.len() {
            if !queue.is_live(cursor, epsilon) {
                cursor += 1;
                continue;
            }

            let mut selected = cursor;
            if let Some(last) = last_subject.as_deref() {
                if queue.subject(cursor) == last && cap - consecutive_hours < epsilon {
                    match queue.find_alternate(cursor + 1, last, epsilon) {
                        Some(alternate) => {
                            tracing::trace!(
                                deferred = cursor,
                                alternate,
                                subject = last,
                                "consecutive cap reached, switching subject"
                            );
                            selected = alternate;
                        }
                        None => {
                            tracing::debug!(
                                subject = last,
                                idle_hours = capacity - hours_used,
                                "no other subject left, leaving remaining capacity idle"
                            );
                            break;
                        }
                    }
                }
            }

            let subject = queue.subject(selected).to_string();
            if last_subject.as_deref() != Some(subject.as_str()) {
                consecutive_hours = 0.0;
            }

            let step = queue
                .remaining(selected)
                .min(capacity - hours_used)
                .min(cap - consecutive_hours);

            if step < epsilon {
                cursor += 1;
                continue;
            }

            if step < self.config.min_task_hours {
                tracing::debug!(
                    subject = subject.as_str(),
                    hours = step,
                    "placing fragment below advisory minimum"
                );
            }
            tracing::trace!(subject = subject.as_str(), hours = step, "placed task");

            tasks.push(ScheduledTask {
                subject: subject.clone(),
                topic: queue.topic(selected).to_string(),
                hours_allocated: step,
            });
            hours_used += step;
            consecutive_hours += step;
            *allocated.entry(subject.clone()).or_insert(0.0) += step;
            queue.consume(selected, step);
            last_subject = Some(subject);

            if selected == cursor && !queue.is_live(cursor, epsilon) {
                cursor += 1;
            }
        }

        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::WorkKind;

    fn blocks(subject: &str, count: usize) -> Vec<WorkItem> {
        (0..count)
            .map(|i| {
                let kind = if i == 0 {
                    WorkKind::PriorityReview
                } else {
                    WorkKind::Practice
                };
                WorkItem::new(subject, kind, 1.0)
            })
            .collect()
    }

    fn longest_run(tasks: &[ScheduledTask]) -> f64 {
        let mut longest: f64 = 0.0;
        let mut run = 0.0;
        let mut last: Option<&str> = None;
        for task in tasks {
            if last == Some(task.subject.as_str()) {
                run += task.hours_allocated;
            } else {
                run = task.hours_allocated;
            }
            last = Some(task.subject.as_str());
            longest = longest.max(run);
        }
        longest
    }

    #[test]
    fn test_cap_forces_subject_switch() {
        let mut items = blocks("Math", 3);
        items.extend(blocks("Physics", 2));

        let schedule = DayScheduler::new().schedule(&items, &[5.0]);
        let day = schedule.plan.tasks(0);

        assert_eq!(day[0].subject, "Math");
        assert_eq!(day[1].subject, "Math");
        assert_eq!(day[2].subject, "Physics");
        assert!(longest_run(day) <= 2.0 + 1e-3);
        assert!((schedule.plan.hours_on(0) - 5.0).abs() < 1e-9);
        assert!((schedule.allocated_hours("Math") - 3.0).abs() < 1e-9);
        assert!((schedule.allocated_hours("Physics") - 2.0).abs() < 1e-9);
        assert!(schedule.unplaced.is_empty());
    }

    #[test]
    fn test_single_subject_leaves_capacity_idle() {
        let items = blocks("Math", 5);

        let schedule = DayScheduler::new().schedule(&items, &[5.0, 5.0]);

        assert!((schedule.plan.hours_on(0) - 2.0).abs() < 1e-9);
        assert!((schedule.plan.hours_on(1) - 2.0).abs() < 1e-9);
        assert!((schedule.unplaced["Math"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_items_split_across_days() {
        let items = vec![
            WorkItem::new("Art", WorkKind::QuickReview, 0.75),
            WorkItem::new("Math", WorkKind::PriorityReview, 1.0),
        ];

        let schedule = DayScheduler::new().schedule(&items, &[0.5, 0.5, 2.0]);

        assert_eq!(schedule.plan.tasks(0).len(), 1);
        assert!((schedule.plan.tasks(0)[0].hours_allocated - 0.5).abs() < 1e-9);
        // Art's remaining 0.25h opens day 1, Math takes the rest
        let day1 = schedule.plan.tasks(1);
        assert_eq!(day1[0].subject, "Art");
        assert!((day1[0].hours_allocated - 0.25).abs() < 1e-9);
        assert_eq!(day1[1].subject, "Math");
        assert!((day1[1].hours_allocated - 0.25).abs() < 1e-9);
        assert!((schedule.plan.hours_on(2) - 0.75).abs() < 1e-9);
        assert!(schedule.unplaced.is_empty());
    }

    #[test]
    fn test_cap_resets_each_day() {
        let mut items = blocks("Math", 4);
        items.extend(blocks("Physics", 1));

        let schedule = DayScheduler::new().schedule(&items, &[3.0, 2.0]);

        // Day 0: Math 2h, Physics 1h. Day 1 starts fresh with Math 2h.
        assert!((schedule.plan.hours_on(0) - 3.0).abs() < 1e-9);
        assert!(schedule.plan.tasks(1).iter().all(|t| t.subject == "Math"));
        assert!((schedule.plan.hours_on(1) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_negative_days_skipped() {
        let items = blocks("Math", 2);

        let schedule = DayScheduler::new().schedule(&items, &[0.0, -3.0, 1.0]);

        assert!(schedule.plan.tasks(0).is_empty());
        assert!(schedule.plan.tasks(1).is_empty());
        assert!((schedule.plan.hours_on(2) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_days_past_week_ignored() {
        let items = blocks("Math", 1);
        let capacity = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 8.0];

        let schedule = DayScheduler::new().schedule(&items, &capacity);

        assert!(schedule.plan.is_empty());
        assert!((schedule.unplaced["Math"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_queue() {
        let schedule = DayScheduler::new().schedule(&[], &[5.0; 7]);
        assert!(schedule.plan.is_empty());
        assert!(schedule.allocated.is_empty());
        assert_eq!(schedule.plan.iter().count(), 7);
    }

    #[test]
    fn test_custom_cap() {
        let mut items = blocks("Math", 3);
        items.extend(blocks("Physics", 3));
        let config = SchedulerConfig {
            max_consecutive_hours: 1.0,
            ..SchedulerConfig::default()
        };

        let schedule = DayScheduler::with_config(config).schedule(&items, &[6.0]);
        let subjects: Vec<&str> = schedule
            .plan
            .tasks(0)
            .iter()
            .map(|t| t.subject.as_str())
            .collect();

        assert_eq!(
            subjects,
            vec!["Math", "Physics", "Math", "Physics", "Math", "Physics"]
        );
    }

    #[test]
    fn test_sliver_of_capacity_left_unused() {
        let mut items = blocks("Math", 2);
        items.extend(blocks("Physics", 1));

        let schedule = DayScheduler::new().schedule(&items, &[1.0005, 3.0]);

        let day0 = schedule.plan.tasks(0);
        assert_eq!(day0.len(), 1);
        assert_eq!(day0[0].subject, "Math");
        assert!((day0[0].hours_allocated - 1.0).abs() < 1e-9);
        assert!(schedule
            .plan
            .iter()
            .flat_map(|(_, tasks)| tasks)
            .all(|t| t.hours_allocated >= 1e-3));

        let day1 = schedule.plan.tasks(1);
        assert_eq!(day1.len(), 2);
        assert_eq!(day1[0].subject, "Math");
        assert!((day1[0].hours_allocated - 1.0).abs() < 1e-9);
        assert_eq!(day1[1].subject, "Physics");
        assert!((day1[1].hours_allocated - 1.0).abs() < 1e-9);
        assert!(schedule.unplaced.is_empty());
    }

    #[test]
    fn test_float_residue_reaches_cap() {
        let mut items: Vec<WorkItem> = (0..25)
            .map(|_| WorkItem::new("Math", WorkKind::QuickReview, 0.1))
            .collect();
        items.extend((0..5).map(|_| WorkItem::new("Physics", WorkKind::QuickReview, 0.1)));

        let schedule = DayScheduler::new().schedule(&items, &[3.0]);
        let day = schedule.plan.tasks(0);

        assert!((schedule.plan.hours_on(0) - 3.0).abs() < 1e-3);
        assert!(longest_run(day) <= 2.0 + 1e-3);
        assert!((schedule.allocated_hours("Math") - 2.5).abs() < 1e-3);
        assert!((schedule.allocated_hours("Physics") - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_task_display() {
        let task = ScheduledTask {
            subject: "Math".to_string(),
            topic: "Practice problems and exercises".to_string(),
            hours_allocated: 1.5,
        };
        assert_eq!(
            task.to_string(),
            "[Math] Study Practice problems and exercises for 1.50 hours."
        );
    }
}
