//! Tests for engine operations: placement, turn switching, reset.

use tictactoe_engine::{
    Board, Cell, Coord, EngineOptions, GameEngine, GameStatus, PlacementError, Player,
};

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.board().iter().all(|(_, cell)| cell == Cell::Empty));
    assert!(!engine.is_winner());
    assert!(!engine.is_draw());
    assert_eq!(engine.empty_cells().len(), 9);
}

#[test]
fn test_place_writes_current_player() {
    let mut engine = GameEngine::new();
    engine.place_token(0, 2).unwrap();
    engine.switch_player();
    engine.place_token(2, 0).unwrap();

    let board = engine.board();
    assert_eq!(board.get(Coord::new(0, 2).unwrap()), Cell::X);
    assert_eq!(board.get(Coord::new(2, 0).unwrap()), Cell::O);
    assert_eq!(engine.move_count(), 2);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut engine = GameEngine::new();
    engine.place_token(1, 1).unwrap();
    engine.switch_player();
    let before = engine.state().clone();

    let result = engine.place_token(1, 1);

    assert_eq!(result, Err(PlacementError::CellOccupied { row: 1, col: 1 }));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.board().get(Coord::new(1, 1).unwrap()), Cell::X);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut engine = GameEngine::new();
    engine.place_token(0, 0).unwrap();
    let before = engine.state().clone();

    for (row, col) in [(3, 0), (0, -1), (-1, -1), (3, 3), (100, 1)] {
        assert_eq!(
            engine.place_token(row, col),
            Err(PlacementError::OutOfBounds { row, col })
        );
        assert_eq!(engine.state(), &before);
    }
}

#[test]
fn test_deserialized_coord_cannot_leave_board() {
    let mut engine = GameEngine::new();

    assert!(serde_json::from_str::<Coord>(r#"{"row":5,"col":0}"#).is_err());

    let coord: Coord = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
    engine.place_at(coord).unwrap();
    assert_eq!(engine.board().get(coord), Cell::X);
}

#[test]
fn test_switch_player_twice_restores() {
    let mut engine = GameEngine::new();
    engine.switch_player();
    assert_eq!(engine.current_player(), Player::O);
    engine.switch_player();
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_returned_board_does_not_alias_engine() {
    let mut engine = GameEngine::new();
    let before = engine.board();
    engine.place_token(0, 0).unwrap();
    assert_eq!(before, Board::new());
    assert_ne!(engine.board(), before);
}

#[test]
fn test_reset_after_win() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        engine.play_turn(row, col).unwrap();
    }
    assert!(engine.is_over());

    engine.reset();

    assert_eq!(engine.board(), Board::new());
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.place_token(0, 0).is_ok());
}

#[test]
fn test_reset_mid_game_with_o_to_move() {
    let mut engine = GameEngine::new();
    engine.play_turn(1, 1).unwrap();
    assert_eq!(engine.current_player(), Player::O);

    engine.reset();

    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_reset_keeps_options() {
    let options = EngineOptions { fast_path: true };
    let mut engine = GameEngine::with_options(options);
    engine.play_turn(0, 0).unwrap();
    engine.reset();
    assert_eq!(engine.options(), options);
}

#[test]
fn test_play_turn_switches_only_while_in_progress() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.play_turn(0, 0), Ok(GameStatus::InProgress));
    assert_eq!(engine.current_player(), Player::O);

    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        engine.play_turn(row, col).unwrap();
    }
    assert_eq!(engine.play_turn(0, 2), Ok(GameStatus::Won(Player::X)));
    // The winner stays current so a renderer can announce them.
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_play_turn_error_keeps_turn() {
    let mut engine = GameEngine::new();
    engine.play_turn(0, 0).unwrap();
    assert!(engine.play_turn(0, 0).is_err());
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PlacementError::OutOfBounds { row: 3, col: -1 }.to_string(),
        "Cell (3, -1) is off the board"
    );
    assert_eq!(
        PlacementError::CellOccupied { row: 0, col: 2 }.to_string(),
        "Cell (0, 2) is already taken"
    );
    assert_eq!(
        PlacementError::GameAlreadyOver(GameStatus::Won(Player::O)).to_string(),
        "Game is already over (O wins)"
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    engine.play_turn(1, 1).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.current_player(), Player::O);
    assert_eq!(*snapshot.move_count(), 1);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: tictactoe_engine::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_board_display() {
    let mut engine = GameEngine::new();
    engine.play_turn(0, 0).unwrap();
    engine.play_turn(1, 1).unwrap();
    assert_eq!(engine.board().to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
}

#[test]
fn test_state_serializes_for_inspection() {
    let mut engine = GameEngine::new();
    engine.play_turn(2, 2).unwrap();

    let value = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(value["move_count"], 1);
    assert_eq!(value["current_player"], "O");
    assert_eq!(value["tally"]["x"], 1);
    assert_eq!(value["tally"]["o"], 0);
}
