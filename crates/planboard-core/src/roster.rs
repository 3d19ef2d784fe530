//! Roster maintenance helpers.
//!
//! Pure functions over participant and task snapshots; callers own the
//! state and decide whether to keep the returned values. Deleting a
//! participant means removing the name from the roster and from every
//! task's participant set, and the roster self-heals by absorbing names
//! that appear on tasks but were never registered.

use crate::board::{Participant, Task};

/// Unique participant names found on tasks, in first-encounter order.
pub fn names_in_tasks(tasks: &[Task]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for task in tasks {
        for name in &task.participants {
            if !names.iter().any(|known| known == name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// Roster with every task-assigned name absorbed.
///
/// Names already on the roster keep their position; missing ones are
/// appended in the order they appear on tasks.
pub fn merge_task_participants(roster: &[Participant], tasks: &[Task]) -> Vec<Participant> {
    let mut merged = roster.to_vec();
    for name in names_in_tasks(tasks) {
        if !merged.iter().any(|participant| participant.name == name) {
            merged.push(Participant { name });
        }
    }
    merged
}

/// Roster with the trimmed name appended, or `None` when the name is
/// empty or already present (case-sensitive).
pub fn add_unique(roster: &[Participant], name: &str) -> Option<Vec<Participant>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    if roster.iter().any(|participant| participant.name == trimmed) {
        return None;
    }
    let mut updated = roster.to_vec();
    updated.push(Participant {
        name: trimmed.to_string(),
    });
    Some(updated)
}

/// Remove a participant from the roster and from every task.
///
/// Tasks themselves are kept even when their participant list becomes
/// empty; only the assignment is dropped.
pub fn remove_participant(
    roster: &[Participant],
    tasks: &[Task],
    name: &str,
) -> (Vec<Participant>, Vec<Task>) {
    let updated_roster = roster
        .iter()
        .filter(|participant| participant.name != name)
        .cloned()
        .collect();

    let updated_tasks = tasks
        .iter()
        .map(|task| {
            let mut updated = task.clone();
            updated.participants.retain(|assigned| assigned != name);
            updated
        })
        .collect();

    (updated_roster, updated_tasks)
}
