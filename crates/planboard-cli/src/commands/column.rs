//! Column management commands for CLI.

use clap::Subcommand;
use planboard_core::Column;

use crate::common::BoardStore;
use crate::Context;

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column to the board
    Add {
        /// Column title
        title: String,
    },
    /// List columns
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a column and all of its tasks
    Delete {
        /// Column ID
        id: String,
    },
}

pub fn run(action: ColumnAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let mut board = store.load()?;

    match action {
        ColumnAction::Add { title } => {
            let column = Column::new(title);
            board.columns.push(column.clone());
            store.save(&board)?;
            println!("Column created: {} ({})", column.title, column.id);
        }
        ColumnAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&board.columns)?);
            } else if board.columns.is_empty() {
                println!("No columns.");
            } else {
                for column in &board.columns {
                    println!("{}  {}", column.id, column.title);
                }
            }
        }
        ColumnAction::Delete { id } => {
            let before = board.columns.len();
            board.columns.retain(|column| column.id != id);
            if board.columns.len() == before {
                return Err(format!("no column with id '{id}'").into());
            }
            // Tasks do not outlive their lane.
            board.tasks.retain(|task| task.column_id != id);
            store.save(&board)?;
            println!("Column deleted: {id}");
        }
    }

    Ok(())
}
