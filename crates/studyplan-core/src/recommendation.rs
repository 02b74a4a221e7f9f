//! Study resource recommendations.
//!
//! Each subject's first work item is annotated with a short suggestion
//! taken from a name-keyed table, falling back to a generic entry.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::allocation::WorkItem;

const DEFAULT_RECOMMENDATION: &str =
    "Suggested Resource: Find a recent tech blog post related to your field.";

const BUILTIN_RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "Algorithms",
        "Suggested Resource: Watch a video on Dynamic Programming on YouTube.",
    ),
    (
        "Data Structures",
        "Suggested Resource: Read an article on Hash Table collision resolution techniques.",
    ),
    (
        "C Programming",
        "Suggested Resource: Practice pointer arithmetic problems online.",
    ),
    (
        "Calculus",
        "Suggested Resource: Review related theorems and proof methods.",
    ),
    (
        "Physics",
        "Suggested Resource: Practice derivations and problem-solving techniques.",
    ),
    (
        "Mathematics",
        "Suggested Resource: Work through practice problems from your textbook.",
    ),
    (
        "Chemistry",
        "Suggested Resource: Review reaction mechanisms and balancing equations.",
    ),
];

/// User-supplied recommendation overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    /// Replaces the fallback text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Subject name -> recommendation, added on top of the built-in table
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

/// Name-keyed recommendation lookup with a fallback entry.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: HashMap<String, String>,
    default: String,
}

impl RecommendationTable {
    /// Table with the built-in entries
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_RECOMMENDATIONS
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
            default: DEFAULT_RECOMMENDATION.to_string(),
        }
    }

    /// Built-in table with configured overrides applied
    pub fn from_config(config: &RecommendationsConfig) -> Self {
        let mut table = Self::builtin();
        for (name, text) in &config.entries {
            table = table.with_entry(name.clone(), text.clone());
        }
        if let Some(default) = &config.default {
            table.default = default.clone();
        }
        table
    }

    /// Add or replace the entry for a subject
    pub fn with_entry(mut self, subject: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(subject.into(), text.into());
        self
    }

    /// Recommendation for a subject, or the fallback
    pub fn lookup(&self, subject: &str) -> &str {
        self.entries
            .get(subject)
            .map(String::as_str)
            .unwrap_or(self.default.as_str())
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Appends recommendations to work item topics.
#[derive(Debug, Clone, Default)]
pub struct RecommendationAnnotator {
    table: RecommendationTable,
}

impl RecommendationAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: RecommendationTable) -> Self {
        Self { table }
    }

    /// Annotate the first item of every subject, in list order.
    pub fn annotate(&self, items: &mut [WorkItem]) {
        let mut seen: HashSet<String> = HashSet::new();
        for item in items.iter_mut() {
            if !seen.insert(item.subject.clone()) {
                continue;
            }
            let recommendation = self.table.lookup(&item.subject);
            item.topic = format!("{} ({})", item.topic, recommendation);
        }
    }
}
