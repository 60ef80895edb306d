//! Tic-tac-toe game engine.
//!
//! A presentation-free state machine for 3x3 tic-tac-toe: turn management,
//! placement validation, and win/draw detection. Renderers (terminal, GUI,
//! test drivers) own a [`GameEngine`], feed it coordinates, and draw the
//! [`Board`] it hands back.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.play_turn(row, col)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_engine::PlacementError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::{EngineOptions, GameEngine, GameState, Snapshot, Tally};
pub use error::PlacementError;
pub use position::{Coord, SIZE};
pub use types::{Board, Cell, GameStatus, Player};
