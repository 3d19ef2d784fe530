//! Per-participant workload aggregation.
//!
//! Rolls the task list up into one record per participant: total
//! assigned minutes plus their tasks annotated with resolved column
//! titles and durations. Aggregation is independent of conflict
//! detection: a participant on two overlapping tasks is counted once
//! per task, so "busy time" for a double-booked participant exceeds the
//! wall-clock span they actually cover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::{Column, Task};
use crate::interval::{minute_of_day, MinuteSpan};

/// One task as it appears in a participant's workload report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLoad {
    pub id: String,
    pub column_id: String,
    /// Resolved column title, or the analyzer's fallback label when the
    /// column no longer exists
    pub column_title: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Workload summary for one participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantLoad {
    pub name: String,
    /// Sum of task durations; overlapping tasks are not deduplicated
    pub total_minutes: i64,
    /// Tasks ordered by ascending start time (stable)
    pub tasks: Vec<TaskLoad>,
}

/// Analyzer producing participant workload reports.
#[derive(Debug, Clone)]
pub struct ParticipantLoadAnalyzer {
    /// Label used for tasks whose column is missing from the lookup
    pub unknown_column_label: String,
}

impl Default for ParticipantLoadAnalyzer {
    fn default() -> Self {
        Self {
            unknown_column_label: "Unknown".to_string(),
        }
    }
}

impl ParticipantLoadAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fallback label for missing columns.
    pub fn with_unknown_column_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_column_label = label.into();
        self
    }

    /// Aggregate the task list into one record per participant.
    ///
    /// Every roster name appears in the output, even with zero tasks.
    /// Task participant lists are authoritative: a name found on a task
    /// but missing from the roster is still aggregated. Output is
    /// ordered by descending total minutes; ties keep the order names
    /// were first encountered while scanning the task list, with
    /// zero-task roster names appended in roster order. Tasks whose
    /// interval is not strictly ordered are skipped.
    pub fn analyze<'a, I>(&self, tasks: &[Task], roster: I, columns: &[Column]) -> Vec<ParticipantLoad>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let column_titles: HashMap<&str, &str> = columns
            .iter()
            .map(|column| (column.id.as_str(), column.title.as_str()))
            .collect();

        let mut loads: Vec<ParticipantLoad> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for task in tasks {
            let Some(span) = MinuteSpan::from_times(&task.start, &task.end) else {
                continue;
            };
            let column_title = column_titles
                .get(task.column_id.as_str())
                .copied()
                .unwrap_or(self.unknown_column_label.as_str())
                .to_string();

            for name in &task.participants {
                let index = *index_by_name.entry(name.clone()).or_insert_with(|| {
                    loads.push(ParticipantLoad {
                        name: name.clone(),
                        total_minutes: 0,
                        tasks: Vec::new(),
                    });
                    loads.len() - 1
                });

                loads[index].total_minutes += span.minutes();
                loads[index].tasks.push(TaskLoad {
                    id: task.id.clone(),
                    column_id: task.column_id.clone(),
                    column_title: column_title.clone(),
                    title: task.title.clone(),
                    start: task.start,
                    end: task.end,
                    duration_minutes: span.minutes(),
                });
            }
        }

        // Idle roster names still get a record so the UI can offer
        // add/remove actions for them.
        for name in roster {
            if !index_by_name.contains_key(name) {
                index_by_name.insert(name.to_string(), loads.len());
                loads.push(ParticipantLoad {
                    name: name.to_string(),
                    total_minutes: 0,
                    tasks: Vec::new(),
                });
            }
        }

        for load in &mut loads {
            load.tasks
                .sort_by_key(|task_load| minute_of_day(&task_load.start));
        }

        loads.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
        loads
    }
}
