//! Rendering of engine snapshots for the terminal.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tictactoe_engine::{GameStatus, Snapshot};
use tracing::instrument;

/// How boards and results are written.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable grid.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes a snapshot in the given format.
#[instrument(skip(out, snapshot))]
pub fn render(out: &mut impl Write, snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", snapshot.board())?;
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(snapshot).context("Failed to encode snapshot")?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Announcement for a finished game, `None` while play continues.
pub fn result_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("{player} wins!")),
        GameStatus::Draw => Some("It's a draw!".to_string()),
    }
}
