//! Board validation command for CLI.

use clap::Args;

use crate::common::{load_project_config, BoardStore};
use crate::Context;

#[derive(Args)]
pub struct ValidateArgs {}

pub fn run(_args: ValidateArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = BoardStore::open(ctx.board.clone());
    let board = store.load()?;
    let config = load_project_config(ctx.config.as_deref())?;
    config.validate()?;

    let mut failures = 0usize;
    for task in &board.tasks {
        match config.validate_task(task) {
            Ok(()) => {}
            Err(err) => {
                failures += 1;
                eprintln!("invalid task '{}' ({}): {err}", task.title, task.id);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} invalid task(s)").into());
    }

    println!("All {} task(s) valid.", board.tasks.len());
    Ok(())
}
