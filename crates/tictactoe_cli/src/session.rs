//! Interactive hot-seat session over any line reader and writer.
//!
//! The session is a caller of the engine and nothing more: it shows the
//! board, reads coordinates, and reports what the engine says. Board contents
//! are never tracked here.

use crate::input::{Entry, parse_entry};
use crate::output::{OutputFormat, render, result_message};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{EngineOptions, GameEngine, GameStatus, PlacementError};
use tracing::{debug, info, instrument, warn};

/// Results accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games that reached a result.
    pub games: usize,
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        use tictactoe_engine::Player;

        self.games += 1;
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// How a single game ended.
enum GameEnd {
    Finished(GameStatus),
    Quit,
}

/// Terminal session driving one engine.
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, options: EngineOptions, format: OutputFormat) -> Self {
        Self {
            engine: GameEngine::with_options(options),
            input,
            output,
            format,
        }
    }

    /// Plays games until the player quits, declines a new game, or input ends.
    #[instrument(skip(self), fields(format = %self.format))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            match self.play_game()? {
                GameEnd::Quit => break,
                GameEnd::Finished(status) => {
                    summary.record(status);
                    info!(%status, games = summary.games, "Game finished");
                }
            }
            if !self.ask_new_game()? {
                break;
            }
            self.engine.reset();
        }

        debug!(?summary, "Session over");
        Ok(summary)
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn play_game(&mut self) -> Result<GameEnd> {
        loop {
            render(&mut self.output, &self.engine.snapshot(), self.format)?;
            writeln!(
                self.output,
                "Place your {} (row col, 0-2; q to quit):",
                self.engine.current_player()
            )?;

            let Some(line) = self.read_line()? else {
                return Ok(GameEnd::Quit);
            };

            let (row, col) = match parse_entry(&line) {
                Ok(Entry::Quit) => return Ok(GameEnd::Quit),
                Ok(Entry::Move(row, col)) => (row, col),
                Err(e) => {
                    writeln!(self.output, "Invalid input: {e}.")?;
                    continue;
                }
            };

            match self.engine.play_turn(row, col) {
                Ok(GameStatus::InProgress) => {}
                Ok(status) => {
                    render(&mut self.output, &self.engine.snapshot(), self.format)?;
                    if let Some(message) = result_message(status) {
                        writeln!(self.output, "{message}")?;
                    }
                    return Ok(GameEnd::Finished(status));
                }
                Err(e @ (PlacementError::OutOfBounds { .. } | PlacementError::CellOccupied { .. })) => {
                    writeln!(self.output, "Cannot play here. {e}.")?;
                }
                Err(PlacementError::GameAlreadyOver(status)) => {
                    warn!(%status, "Engine reported a finished game mid-loop");
                    return Ok(GameEnd::Finished(status));
                }
            }
        }
    }

    fn ask_new_game(&mut self) -> Result<bool> {
        writeln!(self.output, "New game? [Y/n]")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let answer = line.trim().to_ascii_lowercase();
        Ok(!matches!(answer.as_str(), "n" | "no" | "q" | "quit" | "exit"))
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
