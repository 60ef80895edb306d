//! Status invariant: the stored status is what the board says.

use super::Invariant;
use crate::{GameState, GameStatus, rules};

/// Invariant: the stored [`GameStatus`] equals a full evaluation of the board.
pub struct StatusMatchesBoard;

impl StatusMatchesBoard {
    /// Evaluates the board from scratch, without any fast path.
    pub fn expected(state: &GameState) -> GameStatus {
        if let Some(winner) = rules::check_winner(state.board()) {
            GameStatus::Won(winner)
        } else if rules::is_draw(state.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.status() == Self::expected(state)
    }

    fn description() -> &'static str {
        "Stored status matches the board"
    }
}
