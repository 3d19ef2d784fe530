//! Shared helpers for CLI commands: board snapshot file IO, project
//! configuration loading, and wall-clock parsing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use planboard_core::{BoardSnapshot, ProjectConfig};

/// Board snapshot store backed by a JSON file.
///
/// This is a demo/test harness for the engine, not the application's
/// persistence layer; a missing file reads as an empty board.
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    /// Open a store at the given path, or the default location under
    /// the platform data directory.
    pub fn open(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("planboard")
                .join("board.json")
        });
        Self { path }
    }

    pub fn load(&self) -> Result<BoardSnapshot, Box<dyn std::error::Error>> {
        if !self.path.exists() {
            return Ok(BoardSnapshot::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(BoardSnapshot::from_json_str(&raw)?)
    }

    pub fn save(&self, board: &BoardSnapshot) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, board.to_json_string()?)?;
        Ok(())
    }
}

/// Load the project configuration, falling back to defaults when no
/// path is given.
pub fn load_project_config(
    path: Option<&Path>,
) -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(ProjectConfig::from_toml_str(&raw)?)
        }
        None => Ok(ProjectConfig::default()),
    }
}

/// Parse an `HH:MM` wall-clock string onto a reference date.
///
/// The engine only reads hour and minute, so the date is an arbitrary
/// fixed anchor shared by every parsed value.
pub fn parse_clock(input: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    let (hour_part, minute_part) = input
        .split_once(':')
        .ok_or_else(|| format!("invalid time '{input}': expected HH:MM"))?;
    let hour: u32 = hour_part
        .parse()
        .map_err(|_| format!("invalid hour in '{input}'"))?;
    let minute: u32 = minute_part
        .parse()
        .map_err(|_| format!("invalid minute in '{input}'"))?;
    if hour > 23 || minute > 59 {
        return Err(format!("time '{input}' out of range").into());
    }

    let anchor = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| format!("time '{input}' out of range"))?;
    Ok(DateTime::from_naive_utc_and_offset(anchor, Utc))
}

/// Roster names for conflict/stats commands: the stored roster plus any
/// names found only on tasks, mirroring the board's self-heal behavior.
pub fn effective_roster(board: &BoardSnapshot) -> Vec<String> {
    planboard_core::roster::merge_task_participants(&board.participants, &board.tasks)
        .into_iter()
        .map(|participant| participant.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_clock_accepts_hh_mm() {
        let time = parse_clock("09:30").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert!(parse_clock("930").is_err());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("09:75").is_err());
        assert!(parse_clock("nine:thirty").is_err());
    }
}
