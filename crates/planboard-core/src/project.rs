//! Project configuration and save-time task validation.
//!
//! A project is a named workspace with its own day window and segment
//! granularity. The segment is the smallest schedulable unit
//! (`60 / segments_per_hour` minutes); the save validation here is the
//! gate the conflict detector relies on to never see sub-segment or
//! unordered candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::board::Task;
use crate::error::{ConfigError, ValidationError};
use crate::interval;

/// Per-project scheduling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// First visible hour of the day (0-23)
    pub day_start_hour: u32,
    /// Hour the day ends at, exclusive (1-24)
    pub day_end_hour: u32,
    /// Segments per hour; 60 must be divisible by this
    pub segments_per_hour: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 6,
            day_end_hour: 21,
            segments_per_hour: 6,
        }
    }
}

impl ProjectConfig {
    /// Minutes in one scheduling segment.
    pub fn segment_minutes(&self) -> i64 {
        60 / i64::from(self.segments_per_hour)
    }

    /// Check the configuration values themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments_per_hour == 0 || 60 % self.segments_per_hour != 0 {
            return Err(ConfigError::InvalidValue {
                key: "segments_per_hour".to_string(),
                message: format!("must divide 60 evenly, got {}", self.segments_per_hour),
            });
        }
        if self.day_end_hour > 24 {
            return Err(ConfigError::InvalidValue {
                key: "day_end_hour".to_string(),
                message: format!("must be at most 24, got {}", self.day_end_hour),
            });
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(ConfigError::InvalidValue {
                key: "day_start_hour".to_string(),
                message: format!(
                    "must be before day_end_hour ({} >= {})",
                    self.day_start_hour, self.day_end_hour
                ),
            });
        }
        Ok(())
    }

    /// Validate a task before it is accepted for save.
    ///
    /// Checks title, interval ordering, the minimum-segment duration,
    /// participant uniqueness, and the configured day window. The
    /// conflict detector deliberately does not repeat these checks.
    pub fn validate_task(&self, task: &Task) -> Result<(), ValidationError> {
        if task.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let duration = interval::duration_minutes(&task.start, &task.end)?;
        let minimum = self.segment_minutes();
        if duration < minimum {
            return Err(ValidationError::BelowMinimumDuration {
                actual: duration,
                minimum,
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for name in &task.participants {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateParticipant { name: name.clone() });
            }
        }

        let window_start = i64::from(self.day_start_hour) * 60;
        let window_end = i64::from(self.day_end_hour) * 60;
        let start_min = interval::minute_of_day(&task.start);
        let end_min = interval::minute_of_day(&task.end);
        if start_min < window_start || end_min > window_end {
            return Err(ValidationError::OutsideDayWindow {
                start_min,
                end_min,
                window_start_min: window_start,
                window_end_min: window_end,
            });
        }

        Ok(())
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// A named workspace with its own scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub config: ProjectConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with the default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            config: ProjectConfig::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
