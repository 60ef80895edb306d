//! Errors returned by the game engine.

use crate::types::GameStatus;

/// Error that can occur when placing a token.
///
/// Every variant leaves the engine state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// Row or column outside `[0, 2]`.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target cell already holds a token.
    #[display("Cell ({row}, {col}) is already taken")]
    CellOccupied {
        /// Row of the taken cell.
        row: usize,
        /// Column of the taken cell.
        col: usize,
    },

    /// A move was attempted after the game reached a terminal state.
    #[display("Game is already over ({_0})")]
    GameAlreadyOver(GameStatus),
}

impl std::error::Error for PlacementError {}
