//! Conflict check command for CLI.

use clap::Args;
use planboard_core::{CandidateSlot, ConflictDetector};
use serde::Serialize;

use crate::common::{effective_roster, parse_clock, BoardStore};
use crate::Context;

#[derive(Args)]
pub struct CheckArgs {
    /// Candidate start time, HH:MM
    #[arg(long)]
    pub start: String,
    /// Candidate end time, HH:MM
    #[arg(long)]
    pub end: String,
    /// Check a single participant instead of the whole roster
    #[arg(long)]
    pub participant: Option<String>,
    /// Task id to exclude from the scan (the task being edited)
    #[arg(long)]
    pub exclude: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport {
    start: String,
    end: String,
    conflicted: Vec<String>,
}

pub fn run(args: CheckArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let board = store.load()?;

    let start = parse_clock(&args.start)?;
    let end = parse_clock(&args.end)?;
    let slot = match &args.exclude {
        Some(task_id) => CandidateSlot::editing(start, end, task_id.clone()),
        None => CandidateSlot::new(start, end),
    };

    let detector = ConflictDetector::new();
    let conflicted = match &args.participant {
        Some(name) => {
            if detector.has_conflict(&slot, name, &board.tasks) {
                vec![name.clone()]
            } else {
                Vec::new()
            }
        }
        None => {
            let roster = effective_roster(&board);
            detector.conflicted_participants(
                &slot,
                roster.iter().map(String::as_str),
                &board.tasks,
            )
        }
    };

    if args.json {
        let report = CheckReport {
            start: args.start,
            end: args.end,
            conflicted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if conflicted.is_empty() {
        println!("No conflicts.");
    } else {
        println!("Conflicted participants: {}", conflicted.join(", "));
    }

    Ok(())
}
