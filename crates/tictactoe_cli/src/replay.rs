//! Non-interactive play from a move list.

use crate::input::{InputError, parse_move};
use derive_more::Display;
use tictactoe_engine::{EngineOptions, GameEngine, PlacementError, Snapshot};
use tracing::{debug, instrument, warn};

/// Why a replay stopped.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// A move could not be parsed.
    #[display("move {} ('{}'): {}", index + 1, text, source)]
    Unreadable {
        /// Zero-based position in the move list.
        index: usize,
        /// The offending text.
        text: String,
        /// Parse failure.
        source: InputError,
    },
    /// The engine refused a move.
    #[display("move {} ('{}'): {}", index + 1, text, source)]
    Rejected {
        /// Zero-based position in the move list.
        index: usize,
        /// The offending text.
        text: String,
        /// Engine error.
        source: PlacementError,
    },
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Unreadable { source, .. } => Some(source),
            ReplayError::Rejected { source, .. } => Some(source),
        }
    }
}

/// Plays `moves` alternately from a fresh game and returns the final snapshot.
///
/// Stops at the first bad move. Moves after a finished game are rejected by
/// the engine like any other illegal move.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(
    moves: &[S],
    options: EngineOptions,
) -> Result<Snapshot, ReplayError> {
    let mut engine = GameEngine::with_options(options);

    for (index, text) in moves.iter().map(|text| text.as_ref()).enumerate() {
        let (row, col) = parse_move(text).map_err(|source| ReplayError::Unreadable {
            index,
            text: text.to_string(),
            source,
        })?;
        let status = engine.play_turn(row, col).map_err(|source| {
            warn!(index, %source, "Replay move rejected");
            ReplayError::Rejected {
                index,
                text: text.to_string(),
                source,
            }
        })?;
        debug!(index, row, col, %status, "Replayed move");
    }

    Ok(engine.snapshot())
}
