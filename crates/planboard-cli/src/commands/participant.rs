//! Participant roster commands for CLI.

use clap::Subcommand;
use planboard_core::roster;

use crate::common::BoardStore;
use crate::Context;

#[derive(Subcommand)]
pub enum ParticipantAction {
    /// Add a participant to the roster
    Add {
        /// Participant name (case-sensitive identity)
        name: String,
    },
    /// List participants
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a participant from the roster and from every task
    Remove {
        /// Participant name
        name: String,
    },
}

pub fn run(action: ParticipantAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let mut board = store.load()?;

    match action {
        ParticipantAction::Add { name } => {
            let Some(updated) = roster::add_unique(&board.participants, &name) else {
                return Err(format!("participant '{}' already exists or is empty", name.trim()).into());
            };
            board.participants = updated;
            store.save(&board)?;
            println!("Participant added: {}", name.trim());
        }
        ParticipantAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&board.participants)?);
            } else if board.participants.is_empty() {
                println!("No participants.");
            } else {
                for participant in &board.participants {
                    println!("{}", participant.name);
                }
            }
        }
        ParticipantAction::Remove { name } => {
            if !board.participants.iter().any(|p| p.name == name) {
                return Err(format!("no participant named '{name}'").into());
            }
            let (participants, tasks) = roster::remove_participant(&board.participants, &board.tasks, &name);
            board.participants = participants;
            board.tasks = tasks;
            store.save(&board)?;
            println!("Participant removed: {name}");
        }
    }

    Ok(())
}
