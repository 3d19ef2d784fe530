use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod common;

/// Shared command context: where the board snapshot and project
/// configuration live.
pub struct Context {
    pub board: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "planboard-cli", version, about = "Planboard CLI")]
struct Cli {
    /// Path to the board snapshot JSON file
    #[arg(long, global = true)]
    board: Option<PathBuf>,

    /// Path to the project configuration TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Participant roster management
    Participant {
        #[command(subcommand)]
        action: commands::participant::ParticipantAction,
    },
    /// Column management
    Column {
        #[command(subcommand)]
        action: commands::column::ColumnAction,
    },
    /// Check a candidate time slot for participant conflicts
    Check(commands::check::CheckArgs),
    /// Per-participant workload report
    Stats(commands::stats::StatsArgs),
    /// Validate every stored task against the project configuration
    Validate(commands::validate::ValidateArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let ctx = Context {
        board: cli.board,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action, &ctx),
        Commands::Participant { action } => commands::participant::run(action, &ctx),
        Commands::Column { action } => commands::column::run(action, &ctx),
        Commands::Check(args) => commands::check::run(args, &ctx),
        Commands::Stats(args) => commands::stats::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "planboard-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
