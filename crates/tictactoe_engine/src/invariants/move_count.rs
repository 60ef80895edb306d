//! Move count invariant: the counter tracks the board.

use super::Invariant;
use crate::GameState;

/// Invariant: `move_count` equals the number of non-empty cells.
pub struct MoveCountMatchesBoard;

impl Invariant<GameState> for MoveCountMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.move_count() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}
