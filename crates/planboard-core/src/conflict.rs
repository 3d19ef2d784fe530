//! Scheduling conflict detection.
//!
//! Decides whether assigning a participant to a candidate time slot
//! collides with any other task that participant is already on. The
//! check is permissive about malformed input: a candidate whose end is
//! not strictly after its start yields "no conflict" instead of an
//! error, and stored tasks with unordered intervals are skipped.
//! Callers are expected to validate ordering separately (see
//! `ProjectConfig::validate_task`) before trusting a conflict-free
//! answer.

use chrono::{DateTime, Utc};

use crate::board::Task;
use crate::interval::MinuteSpan;

/// A candidate time slot to test against existing assignments.
#[derive(Debug, Clone)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Task id to ignore during the check, used when editing an existing
    /// task so it is not compared against itself
    pub exclude_task_id: Option<String>,
}

impl CandidateSlot {
    /// Candidate for a brand-new task.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            exclude_task_id: None,
        }
    }

    /// Candidate for an edit of the task with the given id.
    pub fn editing(start: DateTime<Utc>, end: DateTime<Utc>, task_id: impl Into<String>) -> Self {
        Self {
            start,
            end,
            exclude_task_id: Some(task_id.into()),
        }
    }

    fn span(&self) -> Option<MinuteSpan> {
        MinuteSpan::from_times(&self.start, &self.end)
    }
}

/// Detector for participant double-bookings.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// Check one participant against a candidate slot.
    ///
    /// True iff some task other than `exclude_task_id` lists the
    /// participant and strictly overlaps the candidate interval.
    pub fn has_conflict(&self, candidate: &CandidateSlot, participant: &str, tasks: &[Task]) -> bool {
        let Some(span) = candidate.span() else {
            return false;
        };

        tasks
            .iter()
            .filter(|task| candidate.exclude_task_id.as_deref() != Some(task.id.as_str()))
            .filter(|task| task.participants.iter().any(|name| name == participant))
            .filter_map(|task| MinuteSpan::from_times(&task.start, &task.end))
            .any(|other| span.overlaps(&other))
    }

    /// Check every roster name against a candidate slot.
    ///
    /// Returns the conflicted names in roster order; this is the set the
    /// UI highlights while a task is being edited.
    pub fn conflicted_participants<'a, I>(
        &self,
        candidate: &CandidateSlot,
        roster: I,
        tasks: &[Task],
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        roster
            .into_iter()
            .filter(|name| self.has_conflict(candidate, name, tasks))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Task;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 14, hour, minute, 0).unwrap()
    }

    fn task(id: &str, start: DateTime<Utc>, end: DateTime<Utc>, participants: &[&str]) -> Task {
        Task {
            id: id.to_string(),
            column_id: "col-1".to_string(),
            title: format!("Task {id}"),
            start,
            end,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn overlapping_assignment_is_a_conflict() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(9, 30), at(10, 30));
        assert!(detector.has_conflict(&candidate, "Joe", &tasks));
    }

    #[test]
    fn excluded_task_is_not_compared() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let editing = CandidateSlot::editing(at(9, 30), at(10, 30), "A");
        assert!(!detector.has_conflict(&editing, "Joe", &tasks));
    }

    #[test]
    fn other_participants_do_not_conflict() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(9, 30), at(10, 30));
        assert!(!detector.has_conflict(&candidate, "Ana", &tasks));
    }

    #[test]
    fn touching_slots_do_not_conflict() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(10, 0), at(11, 0));
        assert!(!detector.has_conflict(&candidate, "Joe", &tasks));
    }

    // Permissive policy: an unordered candidate never reports a
    // conflict; ordering is validated separately before save.
    #[test]
    fn unordered_candidate_reports_no_conflict() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let reversed = CandidateSlot::new(at(10, 30), at(9, 30));
        assert!(!detector.has_conflict(&reversed, "Joe", &tasks));

        let empty = CandidateSlot::new(at(9, 30), at(9, 30));
        assert!(!detector.has_conflict(&empty, "Joe", &tasks));
    }

    #[test]
    fn stored_task_with_unordered_interval_is_skipped() {
        let tasks = vec![task("broken", at(10, 0), at(9, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(9, 0), at(10, 0));
        assert!(!detector.has_conflict(&candidate, "Joe", &tasks));
    }

    #[test]
    fn roster_check_keeps_roster_order() {
        let tasks = vec![
            task("A", at(9, 0), at(10, 0), &["Joe", "Ana"]),
            task("B", at(13, 0), at(14, 0), &["Mia"]),
        ];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(9, 30), at(10, 30));
        let conflicted = detector.conflicted_participants(
            &candidate,
            ["Mia", "Ana", "Joe"],
            &tasks,
        );
        assert_eq!(conflicted, vec!["Ana".to_string(), "Joe".to_string()]);
    }

    #[test]
    fn roster_check_is_empty_for_free_slot() {
        let tasks = vec![task("A", at(9, 0), at(10, 0), &["Joe"])];
        let detector = ConflictDetector::new();

        let candidate = CandidateSlot::new(at(16, 0), at(17, 0));
        let conflicted = detector.conflicted_participants(&candidate, ["Joe", "Ana"], &tasks);
        assert!(conflicted.is_empty());
    }
}
