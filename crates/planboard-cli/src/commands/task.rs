//! Task management commands for CLI.

use clap::Subcommand;
use planboard_core::{roster, CandidateSlot, ConflictDetector, Task};

use crate::common::{load_project_config, parse_clock, BoardStore};
use crate::Context;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the board
    Add {
        /// Task title
        title: String,
        /// Column id the task belongs to
        #[arg(long)]
        column: String,
        /// Start time, HH:MM
        #[arg(long)]
        start: String,
        /// End time, HH:MM
        #[arg(long)]
        end: String,
        /// Comma-separated participant names
        #[arg(long)]
        participants: Option<String>,
    },
    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let mut board = store.load()?;

    match action {
        TaskAction::Add {
            title,
            column,
            start,
            end,
            participants,
        } => {
            if !board.columns.iter().any(|col| col.id == column) {
                return Err(format!("no column with id '{column}'").into());
            }

            let start = parse_clock(&start)?;
            let end = parse_clock(&end)?;
            let names: Vec<String> = participants
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            let task = Task::new(column, title, start, end, names);

            let config = load_project_config(ctx.config.as_deref())?;
            config.validate_task(&task)?;

            // Conflicts do not block the save; the board just surfaces
            // them, same as the UI highlight.
            let detector = ConflictDetector::new();
            let slot = CandidateSlot::new(task.start, task.end);
            let conflicted: Vec<String> = task
                .participants
                .iter()
                .filter(|name| detector.has_conflict(&slot, name, &board.tasks))
                .cloned()
                .collect();
            if !conflicted.is_empty() {
                eprintln!("warning: double-booked participants: {}", conflicted.join(", "));
            }

            // Unregistered names join the roster, as in the task modal.
            board.tasks.push(task.clone());
            board.participants = roster::merge_task_participants(&board.participants, &board.tasks);
            store.save(&board)?;

            println!("Task created: {} ({})", task.title, task.id);
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&board.tasks)?);
            } else if board.tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in &board.tasks {
                    println!(
                        "{}  {:02}:{:02}-{:02}:{:02}  {}  [{}]",
                        task.id,
                        chrono::Timelike::hour(&task.start),
                        chrono::Timelike::minute(&task.start),
                        chrono::Timelike::hour(&task.end),
                        chrono::Timelike::minute(&task.end),
                        task.title,
                        task.participants.join(", "),
                    );
                }
            }
        }
        TaskAction::Delete { id } => {
            let before = board.tasks.len();
            board.tasks.retain(|task| task.id != id);
            if board.tasks.len() == before {
                return Err(format!("no task with id '{id}'").into());
            }
            store.save(&board)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
