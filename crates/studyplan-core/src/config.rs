//! TOML-based planner configuration.
//!
//! Holds the policy values used by a planning run:
//! - Allocation block size and significance threshold
//! - Scheduler consecutive-hours cap and epsilons
//! - Recommendation overrides
//!
//! Every field has a default, so an empty document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationConfig;
use crate::error::ConfigError;
use crate::recommendation::RecommendationsConfig;
use crate::scheduler::SchedulerConfig;

/// Planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub allocation: AllocationConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
}

impl PlannerConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or if a policy
    /// value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: PlannerConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Load from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded planner config");
        Ok(cfg)
    }

    /// Load from disk, or return the default config when the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no planner config, using defaults");
            Ok(Self::default())
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check that every policy value is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("allocation.block_hours", self.allocation.block_hours),
            (
                "allocation.min_allocation_hours",
                self.allocation.min_allocation_hours,
            ),
            (
                "scheduler.max_consecutive_hours",
                self.scheduler.max_consecutive_hours,
            ),
            ("scheduler.exhausted_epsilon", self.scheduler.exhausted_epsilon),
            ("scheduler.min_task_hours", self.scheduler.min_task_hours),
        ];

        for (key, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("must be a positive number (got {value})"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let cfg = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert_eq!(cfg.scheduler.max_consecutive_hours, 2.0);
        assert_eq!(cfg.allocation.min_allocation_hours, 0.01);
    }

    #[test]
    fn test_partial_sections() {
        let cfg = PlannerConfig::from_toml_str(
            r#"
            [scheduler]
            max_consecutive_hours = 1.5

            [recommendations]
            default = "Ask your tutor."

            [recommendations.entries]
            Pottery = "Throw ten bowls."
            "#,
        )
        .unwrap();

        assert_eq!(cfg.scheduler.max_consecutive_hours, 1.5);
        assert_eq!(cfg.scheduler.exhausted_epsilon, 0.001);
        assert_eq!(cfg.allocation.block_hours, 1.0);
        assert_eq!(cfg.recommendations.default.as_deref(), Some("Ask your tutor."));
        assert_eq!(cfg.recommendations.entries["Pottery"], "Throw ten bowls.");
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let err = PlannerConfig::from_toml_str("[scheduler]\nmax_consecutive_hours = 0.0\n")
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } => {
                assert_eq!(key, "scheduler.max_consecutive_hours")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = PlannerConfig::from_toml_str("[scheduler\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_serializes_to_toml() {
        let toml = PlannerConfig::default().to_toml_string().unwrap();
        assert!(toml.contains("[scheduler]"));
        assert!(toml.contains("max_consecutive_hours = 2.0"));
        assert_eq!(
            PlannerConfig::from_toml_str(&toml).unwrap(),
            PlannerConfig::default()
        );
    }
}
