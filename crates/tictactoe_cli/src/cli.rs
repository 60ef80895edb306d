//! Command-line interface for the tic-tac-toe terminal front end.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Skip the win check until a player has three tokens down
    #[arg(long, global = true)]
    pub fast_path: bool,

    /// Output format for boards and results
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive hot-seat game on stdin/stdout
    Play,

    /// Apply a list of moves and print the final position
    Replay {
        /// Moves as `row,col` (0-based), X first, alternating
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
