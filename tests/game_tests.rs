//! End-to-end engine tests: submit_move pipeline, scoring, winner

use std::io::Cursor;

use sinkfall::core::{GameState, MoveError};
use sinkfall::setup::read_setup;
use sinkfall::types::{Cell, Direction, PieceKind, Team, WIN_TARGET};

/// 8x8 game with one sink on the floor of column 5
fn game_with_floor_sink() -> GameState {
    read_setup(Cursor::new("sink 1 7 5\n#\n"), 8, 8).unwrap()
}

#[test]
fn test_move_settles_and_scores() {
    let mut state = game_with_floor_sink();
    state
        .place(PieceKind::Single, Team::Light, (4, 4))
        .unwrap();

    // Slide right into the sink column; gravity drops it onto the sink.
    let report = state.submit_move((4, 4), Direction::Right).unwrap();

    assert_eq!(report.score_delta, [1, 0]);
    assert_eq!(report.sunk.len(), 1);
    assert_eq!(report.sunk[0].kind, PieceKind::Single);
    assert_eq!(state.sunk_count(Team::Light), 1);
    assert_eq!(state.sunk_count(Team::Dark), 0);

    // The piece is gone; the sink remains.
    assert_eq!(state.board().get(6, 5), Some(Cell::Empty));
    assert_eq!(state.board().get(7, 5), Some(Cell::Sink));
}

#[test]
fn test_move_without_sink_scores_nothing() {
    let mut state = GameState::new(8, 8);
    state
        .place(PieceKind::Medium, Team::Dark, (3, 3))
        .unwrap();

    let report = state.submit_move((3, 3), Direction::Right).unwrap();
    assert_eq!(report.score_delta, [0, 0]);
    assert!(report.sunk.is_empty());

    // Settled onto the floor in the new column.
    assert!(matches!(state.board().get(6, 4), Some(Cell::Anchor { .. })));
    assert!(matches!(
        state.board().get(7, 4),
        Some(Cell::Extension { .. })
    ));
}

#[test]
fn test_rejected_move_leaves_state_unchanged() {
    let mut state = game_with_floor_sink();
    state
        .place(PieceKind::Single, Team::Light, (4, 4))
        .unwrap();
    let before = state.clone();

    assert_eq!(
        state.submit_move((0, 0), Direction::Left),
        Err(MoveError::NoPieceAt)
    );
    assert_eq!(state, before);
}

#[test]
fn test_score_only_grows_by_whole_pieces() {
    let mut state = game_with_floor_sink();
    state
        .place(PieceKind::Medium, Team::Dark, (4, 4))
        .unwrap();

    // One move, one multi-cell piece sunk: exactly one point.
    let report = state.submit_move((4, 4), Direction::Right).unwrap();
    assert_eq!(report.score_delta, [0, 1]);
    assert_eq!(state.sunk_count(Team::Dark), 1);
}

#[test]
fn test_winner_and_game_over() {
    let mut state = game_with_floor_sink();

    for _ in 0..WIN_TARGET {
        assert_eq!(state.winner(), None);
        state
            .place(PieceKind::Single, Team::Light, (4, 4))
            .unwrap();
        state.submit_move((4, 4), Direction::Right).unwrap();
    }

    assert_eq!(state.winner(), Some(Team::Light));
    state
        .place(PieceKind::Single, Team::Dark, (4, 4))
        .unwrap();
    assert_eq!(
        state.submit_move((4, 4), Direction::Right),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_turn_bookkeeping() {
    let mut state = GameState::new(8, 8);
    assert_eq!(state.current_player(), Team::Light);
    state.switch_player();
    assert_eq!(state.current_player(), Team::Dark);
    state.switch_player();
    assert_eq!(state.current_player(), Team::Light);
}

#[test]
fn test_reset() {
    let mut state = game_with_floor_sink();
    state
        .place(PieceKind::Single, Team::Light, (4, 4))
        .unwrap();
    state.submit_move((4, 4), Direction::Right).unwrap();
    state.switch_player();

    state.reset();
    assert_eq!(state, GameState::new(8, 8));
}

#[test]
fn test_place_rejects_overlap() {
    let mut state = GameState::new(8, 8);
    state
        .place(PieceKind::Square, Team::Light, (3, 3))
        .unwrap();

    // Square occupies (3,3)..(4,4); another square at (4,4) cannot fit
    // upright or otherwise.
    assert!(state
        .place(PieceKind::Square, Team::Dark, (4, 4))
        .is_err());
}

#[test]
fn test_place_prefers_upright_falls_back_to_lying() {
    let mut state = GameState::new(8, 8);
    state
        .place(PieceKind::Medium, Team::Light, (3, 3))
        .unwrap();
    let id = state.board().encode_id(3, 3);
    assert_eq!(state.board().get(4, 3), Some(Cell::Extension { owner: id }));

    // The cell below the next anchor is plugged: fallback to Lying.
    state.place_blocked(4, 4);
    state
        .place(PieceKind::Medium, Team::Dark, (3, 4))
        .unwrap();
    let id = state.board().encode_id(3, 4);
    assert_eq!(state.board().get(3, 5), Some(Cell::Extension { owner: id }));
}

#[test]
fn test_snapshot_reflects_state() {
    let mut state = game_with_floor_sink();
    state
        .place(PieceKind::Single, Team::Light, (4, 4))
        .unwrap();
    state.submit_move((4, 4), Direction::Right).unwrap();
    state.switch_player();

    let snap = state.snapshot();
    assert_eq!(snap.height, 8);
    assert_eq!(snap.width, 8);
    assert_eq!(snap.light_sunk, 1);
    assert_eq!(snap.dark_sunk, 0);
    assert_eq!(snap.to_move, Team::Dark);
    assert_eq!(snap.winner, None);
    assert_eq!(snap.cell(7, 5), Some(Cell::Sink));
}
