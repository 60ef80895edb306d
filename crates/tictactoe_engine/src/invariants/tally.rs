//! Tally invariant: per-player counts agree with the board.

use super::Invariant;
use crate::{GameState, Player};
use strum::IntoEnumIterator;

/// Invariant: each player's tally equals their tokens on the board, and the
/// tallies sum to the move count.
pub struct TallyMatchesBoard;

impl Invariant<GameState> for TallyMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let tally = state.tally();
        Player::iter().all(|player| tally.of(player) == state.board().count_of(player))
            && tally.total() == state.move_count()
    }

    fn description() -> &'static str {
        "Per-player tallies match tokens on the board"
    }
}
