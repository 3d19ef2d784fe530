//! Core error types for planboard-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use thiserror::Error;

/// Core error type for planboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// End does not come strictly after start within the day
    #[error("Invalid interval: end ({end}) must be strictly after start ({start}) within the day")]
    InvalidInterval {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Task title is empty or whitespace-only
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Task is shorter than one scheduling segment
    #[error("Task duration ({actual} min) is below the minimum segment duration ({minimum} min)")]
    BelowMinimumDuration { actual: i64, minimum: i64 },

    /// Same participant listed twice on one task
    #[error("Participant '{name}' is listed more than once on the task")]
    DuplicateParticipant { name: String },

    /// Task lies outside the configured day window
    #[error("Task ({start_min}-{end_min} min) lies outside the day window ({window_start_min}-{window_end_min} min)")]
    OutsideDayWindow {
        start_min: i64,
        end_min: i64,
        window_start_min: i64,
        window_end_min: i64,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SerializeFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
