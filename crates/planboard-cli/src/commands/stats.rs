//! Participant workload report command for CLI.

use clap::Args;
use planboard_core::ParticipantLoadAnalyzer;

use crate::common::{effective_roster, BoardStore};
use crate::Context;

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatsArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let board = store.load()?;

    let roster = effective_roster(&board);
    let analyzer = ParticipantLoadAnalyzer::new();
    let loads = analyzer.analyze(
        &board.tasks,
        roster.iter().map(String::as_str),
        &board.columns,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&loads)?);
        return Ok(());
    }

    if loads.is_empty() {
        println!("No participants.");
        return Ok(());
    }

    for load in &loads {
        println!("{}: {} min, {} task(s)", load.name, load.total_minutes, load.tasks.len());
        for task in &load.tasks {
            println!(
                "  {:02}:{:02}-{:02}:{:02}  {}  ({}, {} min)",
                chrono::Timelike::hour(&task.start),
                chrono::Timelike::minute(&task.start),
                chrono::Timelike::hour(&task.end),
                chrono::Timelike::minute(&task.end),
                task.title,
                task.column_title,
                task.duration_minutes,
            );
        }
    }

    Ok(())
}
