//! Board data model: tasks, columns, participants.
//!
//! These are the snapshot shapes exchanged with the surrounding
//! application layer. The engine only ever borrows them read-only; all
//! mutation happens in the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::interval;

/// A time-boxed activity assigned to zero or more participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, immutable once created
    pub id: String,
    /// Identifier of the owning column
    pub column_id: String,
    /// Display label, non-empty
    pub title: String,
    /// Wall-clock start; only hour and minute are significant
    pub start: DateTime<Utc>,
    /// Wall-clock end; strictly after `start` within the day
    pub end: DateTime<Utc>,
    /// Participant names assigned to this task, unique within the task
    pub participants: Vec<String>,
}

impl Task {
    /// Create a new task with a generated id.
    pub fn new(
        column_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        participants: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            column_id: column_id.into(),
            title: title.into(),
            start,
            end,
            participants,
        }
    }

    /// Duration in minutes; fails when the interval is not ordered.
    pub fn duration_minutes(&self) -> Result<i64, ValidationError> {
        interval::duration_minutes(&self.start, &self.end)
    }
}

/// A named lane grouping tasks (e.g. a location or category).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
}

impl Column {
    /// Create a new column with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
        }
    }
}

/// A person that can be assigned to tasks.
///
/// Identity is the case-sensitive name; no independent id exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A full snapshot of one board: the data contract with the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<Column>,
    pub participants: Vec<Participant>,
    pub tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Parse a snapshot from its JSON representation.
    pub fn from_json_str(input: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json_string(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
