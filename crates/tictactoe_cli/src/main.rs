//! `tictactoe` binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tictactoe_cli::{
    AppConfig, Cli, Command, OutputFormat, Session, render, replay, result_message,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(cli.fast_path, cli.format);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Interactive game on the terminal.
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let mut session = Session::new(stdin, stdout, config.engine_options(), *config.format());
    let summary = session.run()?;

    info!(?summary, "Session ended");
    Ok(())
}

/// Replays a move list and prints the result.
#[instrument(skip(config, moves))]
fn run_replay(config: &AppConfig, moves: &[String]) -> Result<()> {
    let snapshot = replay(moves, config.engine_options()).context("Replay failed")?;

    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &snapshot, *config.format())?;
    if *config.format() == OutputFormat::Text {
        let message = result_message(*snapshot.status())
            .unwrap_or_else(|| format!("In progress, {} to move", snapshot.current_player()));
        writeln!(stdout, "{message}")?;
    }
    Ok(())
}
