//! Win detection logic for tic-tac-toe.

use crate::position::Coord;
use crate::types::{Board, Player};
use tracing::instrument;

const fn c(index: usize) -> Coord {
    Coord::ALL[index]
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [c(0), c(1), c(2)],
    [c(3), c(4), c(5)],
    [c(6), c(7), c(8)],
    // Columns
    [c(0), c(3), c(6)],
    [c(1), c(4), c(7)],
    [c(2), c(5), c(8)],
    // Diagonals
    [c(0), c(4), c(8)],
    [c(2), c(4), c(6)],
];

/// Returns the player holding all three cells of `line`, if any.
///
/// Three empty cells compare equal but never count.
pub fn line_owner(board: &Board, line: [Coord; 3]) -> Option<Player> {
    let [first, second, third] = line.map(|coord| board.get(coord));
    if first == second && second == third {
        first.owner()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// All 8 lines are evaluated; if a malformed position holds more than one
/// completed line the first in [`LINES`] order is reported.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let owners = LINES.map(|line| line_owner(board, line));
    owners.into_iter().flatten().next()
}

/// Checks if any line is complete.
pub fn has_winner(board: &Board) -> bool {
    check_winner(board).is_some()
}
