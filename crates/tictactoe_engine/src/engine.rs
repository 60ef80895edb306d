//! The game engine: sole owner of board state and turn order.

use crate::error::PlacementError;
use crate::position::Coord;
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tokens a single player needs before any line can be complete.
const TOKENS_PER_LINE: usize = 3;

/// Per-player placement counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    x: usize,
    o: usize,
}

impl Tally {
    /// Placements made by `player`.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Placements made by both players.
    pub fn total(&self) -> usize {
        self.x + self.o
    }

    /// Whether either player has enough tokens down to own a line.
    pub fn could_win(&self) -> bool {
        self.x >= TOKENS_PER_LINE || self.o >= TOKENS_PER_LINE
    }

    pub(crate) fn record(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Complete game state, owned by one [`GameEngine`].
///
/// Serializable for inspection but never read back in: only the engine
/// builds one, so its counters always agree with the board.
///
/// ```compile_fail
/// let _: tictactoe_engine::GameState = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) status: GameStatus,
    pub(crate) tally: Tally,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
            tally: Tally::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose token the next placement writes.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of successful placements.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the per-player placement counts.
    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine behavior switches. Survive [`GameEngine::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Skip the line scan while no player has three tokens down.
    ///
    /// Under alternating play this is the "no win before move five" shortcut;
    /// results are identical to a full scan either way.
    pub fast_path: bool,
}

/// Owned, serializable view of the engine for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Copy of the board.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Successful placements so far.
    move_count: usize,
}

/// Tic-tac-toe game engine.
///
/// The engine writes the current player's token on each successful
/// placement but never changes whose turn it is on its own; callers invoke
/// [`switch_player`](Self::switch_player) once per completed turn, or use
/// [`play_turn`](Self::play_turn) which does the whole sequence.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    options: EngineOptions,
}

impl GameEngine {
    /// Creates a new game with default options.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given options.
    #[instrument]
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            state: GameState::new(),
            options,
        }
    }

    /// Returns the active options.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.state.board
    }

    /// Returns the number of successful placements.
    pub fn move_count(&self) -> usize {
        self.state.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Whether the game reached a win or a draw.
    pub fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.state.status.winner()
    }

    /// Coordinates still open for play.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.state.board.empty_cells()
    }

    /// Captures the current state for rendering or serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.state.board,
            current_player: self.state.current_player,
            status: self.state.status,
            move_count: self.state.move_count,
        }
    }

    /// Places the current player's token at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::GameAlreadyOver`] once the game is won or drawn.
    /// - [`PlacementError::OutOfBounds`] if `row` or `col` is outside `[0, 2]`.
    /// - [`PlacementError::CellOccupied`] if the cell holds a token.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn place_token(&mut self, row: i32, col: i32) -> Result<(), PlacementError> {
        self.ensure_in_progress()?;
        let coord = Coord::new(row, col)?;
        self.place_at(coord)
    }

    /// Places the current player's token at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// As [`place_token`](Self::place_token), minus the bounds check.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn place_at(&mut self, coord: Coord) -> Result<(), PlacementError> {
        self.ensure_in_progress()?;

        if !self.state.board.is_empty(coord) {
            debug!(%coord, "Cell already taken");
            return Err(PlacementError::CellOccupied {
                row: coord.row(),
                col: coord.col(),
            });
        }

        let player = self.state.current_player;
        self.state.board.set(coord, player.token());
        self.state.tally.record(player);
        self.state.move_count += 1;
        self.state.status = self.evaluate();
        debug!(%coord, move_count = self.state.move_count, status = %self.state.status, "Token placed");

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(())
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.state.current_player))]
    pub fn switch_player(&mut self) {
        self.state.current_player = self.state.current_player.opponent();
        debug!(to = %self.state.current_player, "Switched player");
    }

    /// Runs a full turn: place, check for a result, and pass the turn only if
    /// play continues.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Same as [`place_token`](Self::place_token); the turn is not passed on
    /// error.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, row: i32, col: i32) -> Result<GameStatus, PlacementError> {
        self.place_token(row, col)?;
        let status = self.state.status;
        match status {
            GameStatus::InProgress => self.switch_player(),
            GameStatus::Won(winner) => info!(%winner, moves = self.state.move_count, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        Ok(status)
    }

    /// Checks if any of the 8 lines holds three matching tokens.
    #[instrument(skip(self))]
    pub fn is_winner(&self) -> bool {
        self.scan_winner().is_some()
    }

    /// Full board with no completed line.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        self.state.move_count == Coord::ALL.len() && !self.is_winner()
    }

    /// Discards the current game for a brand-new one. Options are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
    }

    fn ensure_in_progress(&self) -> Result<(), PlacementError> {
        let status = self.state.status;
        if status.is_terminal() {
            warn!(%status, "Move attempted after game ended");
            return Err(PlacementError::GameAlreadyOver(status));
        }
        Ok(())
    }

    fn scan_winner(&self) -> Option<Player> {
        if self.options.fast_path && !self.state.tally.could_win() {
            return None;
        }
        rules::check_winner(&self.state.board)
    }

    fn evaluate(&self) -> GameStatus {
        if let Some(winner) = self.scan_winner() {
            GameStatus::Won(winner)
        } else if self.state.move_count == Coord::ALL.len() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(&self.state) {
            for violation in &violations {
                warn!(%violation, "Engine invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated: {violations:?}");
        }
    }
}
