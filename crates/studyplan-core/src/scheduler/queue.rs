//! Mutable scheduling state for one planning run.
//!
//! The queue mirrors the ordered work-item list and tracks how many hours
//! of each item are still unplaced. Work items themselves are never
//! modified; a fresh queue is built for every run.

use std::collections::BTreeMap;

use crate::allocation::WorkItem;

#[derive(Debug, Clone)]
struct QueueEntry {
    subject: String,
    topic: String,
    remaining: f64,
}

/// Remaining-hours counters for an ordered list of work items.
#[derive(Debug, Clone, Default)]
pub struct WorkQueue {
    entries: Vec<QueueEntry>,
}

impl WorkQueue {
    pub fn from_items(items: &[WorkItem]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| QueueEntry {
                    subject: item.subject.clone(),
                    topic: item.topic.clone(),
                    remaining: item.hours,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subject(&self, index: usize) -> &str {
        &self.entries[index].subject
    }

    pub fn topic(&self, index: usize) -> &str {
        &self.entries[index].topic
    }

    pub fn remaining(&self, index: usize) -> f64 {
        self.entries[index].remaining
    }

    /// Whether the item still has more than `epsilon` hours to place
    pub fn is_live(&self, index: usize, epsilon: f64) -> bool {
        self.entries[index].remaining > epsilon
    }

    /// Nearest live item at or after `from` whose subject is not `avoid`.
    ///
    /// Pure lookup: nothing is removed or reordered, so items passed over
    /// stay in place for later steps and later days.
    pub fn find_alternate(&self, from: usize, avoid: &str, epsilon: f64) -> Option<usize> {
        (from..self.entries.len())
            .find(|&i| self.entries[i].subject != avoid && self.is_live(i, epsilon))
    }

    /// Take `hours` off an item's remaining counter
    pub(crate) fn consume(&mut self, index: usize, hours: f64) {
        self.entries[index].remaining -= hours;
    }

    /// Unplaced hours per subject, ignoring leftovers at or below `epsilon`
    pub fn remaining_by_subject(&self, epsilon: f64) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.remaining > epsilon) {
            *totals.entry(entry.subject.clone()).or_insert(0.0) += entry.remaining;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::WorkKind;

    fn queue() -> WorkQueue {
        WorkQueue::from_items(&[
            WorkItem::new("Math", WorkKind::PriorityReview, 1.0),
            WorkItem::new("Math", WorkKind::Practice, 1.0),
            WorkItem::new("Physics", WorkKind::PriorityReview, 1.0),
            WorkItem::new("Physics", WorkKind::QuickReview, 0.5),
        ])
    }

    #[test]
    fn test_find_alternate_skips_same_subject() {
        let queue = queue();
        assert_eq!(queue.find_alternate(0, "Math", 0.001), Some(2));
        assert_eq!(queue.find_alternate(3, "Math", 0.001), Some(3));
        assert_eq!(queue.find_alternate(2, "Physics", 0.001), None);
    }

    #[test]
    fn test_find_alternate_skips_exhausted() {
        let mut queue = queue();
        queue.consume(2, 1.0);
        assert_eq!(queue.find_alternate(0, "Math", 0.001), Some(3));
        // Lookup leaves the queue untouched
        assert_eq!(queue.len(), 4);
        assert!(queue.is_live(0, 0.001));
    }

    #[test]
    fn test_consume_and_leftovers() {
        let mut queue = queue();
        queue.consume(0, 1.0);
        queue.consume(1, 0.25);
        queue.consume(3, 0.4999);

        assert!(!queue.is_live(0, 0.001));
        assert!((queue.remaining(1) - 0.75).abs() < 1e-9);

        let leftovers = queue.remaining_by_subject(0.001);
        assert!((leftovers["Math"] - 0.75).abs() < 1e-9);
        assert!((leftovers["Physics"] - 1.0).abs() < 1e-9);
    }
}
