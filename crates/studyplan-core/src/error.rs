//! Core error types for studyplan-core.
//!
//! The planning pipeline itself never fails: empty subject lists, zero
//! capacity and zero total weight all resolve to empty or partial plans.
//! Errors only appear at the edges, when input records are validated or
//! when configuration is read from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Input record validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Subject name is empty or whitespace
    #[error("Subject name cannot be empty")]
    EmptyName,

    /// Weight outside the accepted 1..=5 range
    #[error("Weight for '{name}' must be between 1 and 5 (got {weight})")]
    WeightOutOfRange { name: String, weight: u8 },

    /// Target hours negative or not a number
    #[error("Target hours for '{name}' must be non-negative (got {hours})")]
    InvalidTargetHours { name: String, hours: f64 },

    /// Two subjects share a name (case-insensitive)
    #[error("Subject '{0}' already exists")]
    DuplicateSubject(String),

    /// More daily slots than the weekly cycle holds
    #[error("Capacity has {len} days but a week only has {max}")]
    TooManyDays { len: usize, max: usize },

    /// A daily slot outside [0, 24]
    #[error("Hours for day {day} must be between 0 and 24 (got {hours})")]
    CapacityOutOfRange { day: usize, hours: f64 },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
