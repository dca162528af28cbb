//! Move validation and execution.
//!
//! `validate` decides slide legality without touching the grid; `execute`
//! re-validates and then relocates the whole footprint in one transition, so
//! no caller ever observes a half-moved piece.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::core::pieces::{footprint_at, occupied_cells, orientation_of};
use crate::core::Board;
use crate::types::{Axis, Cell, Direction, Orientation, PieceKind, Team};

/// Why a move was rejected. All recoverable: a rejected move leaves the
/// board unchanged and the caller may prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position out of bounds")]
    OutOfBounds,
    #[error("no piece at position")]
    NoPieceAt,
    #[error("invalid direction")]
    InvalidDirection,
    #[error("path blocked")]
    PathBlocked,
    #[error("game is already decided")]
    GameOver,
}

/// Cells that must be empty for the slide to be legal. At most the far side
/// of a Square (2) or the run ahead of a Large body (3).
type Required = ArrayVec<(i8, i8), 4>;

/// Compute the cells that must be empty ahead of the piece.
///
/// Moving along the body's long axis demands a clear run as long as the body
/// beyond its leading edge; moving across it demands one clear cell beyond
/// each body cell. Square needs its whole far side clear in every direction.
fn required_cells(
    anchor: (i8, i8),
    kind: PieceKind,
    orientation: Orientation,
    dir: Direction,
) -> Required {
    let (row, col) = anchor;
    let (dr, dc) = dir.delta();
    let len = kind.body_len();
    let mut need = Required::new();

    match kind {
        PieceKind::Single => {
            need.push((row + dr, col + dc));
        }
        PieceKind::Square => {
            // Far side in the direction of travel, depth one.
            let (base_r, base_c) = match dir {
                Direction::Right => (row, col + len),
                Direction::Left => (row, col - 1),
                Direction::Down => (row + len, col),
                Direction::Up => (row - 1, col),
            };
            need.push((base_r, base_c));
            match dir.axis() {
                Axis::Horizontal => need.push((base_r + 1, base_c)),
                Axis::Vertical => need.push((base_r, base_c + 1)),
            }
        }
        PieceKind::Medium | PieceKind::Large => {
            if dir.axis() == orientation.long_axis() {
                // Sliding along the body: the run beyond the leading edge
                // must be as long as the body itself.
                let (lead_r, lead_c) = match dir {
                    Direction::Down => (row + len - 1, col),
                    Direction::Right => (row, col + len - 1),
                    Direction::Up | Direction::Left => (row, col),
                };
                for i in 1..=len {
                    need.push((lead_r + dr * i, lead_c + dc * i));
                }
            } else {
                // Sliding across the body: one clear cell beside every body
                // cell, so a legal move can never overlap another piece.
                for (r, c) in occupied_cells(anchor, kind, orientation) {
                    need.push((r + dr, c + dc));
                }
            }
        }
    }
    need
}

/// Decide whether the piece anchored at `anchor` may slide one step in
/// `dir`. Never mutates the board.
pub fn validate(board: &Board, anchor: (i8, i8), dir: Direction) -> Result<(), MoveError> {
    let (row, col) = anchor;
    let cell = board.get(row, col).ok_or(MoveError::OutOfBounds)?;
    let Cell::Anchor { kind, .. } = cell else {
        return Err(MoveError::NoPieceAt);
    };

    let orientation = orientation_of(board, row, col);
    for (r, c) in required_cells(anchor, kind, orientation, dir) {
        match board.get(r, c) {
            None => return Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => {}
            Some(_) => return Err(MoveError::PathBlocked),
        }
    }
    Ok(())
}

/// Slide the piece anchored at `anchor` one step in `dir`.
///
/// Re-validates internally rather than trusting the caller; on success the
/// whole footprint is relocated and every extension rewritten with the new
/// anchor's id.
pub fn execute(board: &mut Board, anchor: (i8, i8), dir: Direction) -> Result<(), MoveError> {
    validate(board, anchor, dir)?;

    let (row, col) = anchor;
    let Some(Cell::Anchor { kind, team }) = board.get(row, col) else {
        unreachable!("validate accepted a non-anchor cell");
    };
    let orientation = orientation_of(board, row, col);
    let old_cells = footprint_at(board, row, col, kind);

    let (dr, dc) = dir.delta();
    relocate(board, &old_cells, (row + dr, col + dc), kind, team, orientation);
    Ok(())
}

/// Atomically rewrite a footprint at a new anchor, preserving orientation.
///
/// Shared by the executor and the gravity resolver; the precondition is that
/// the target cells are free modulo the old footprint itself.
pub(crate) fn relocate(
    board: &mut Board,
    old_cells: &[(i8, i8)],
    new_anchor: (i8, i8),
    kind: PieceKind,
    team: Team,
    orientation: Orientation,
) {
    for &(r, c) in old_cells {
        debug_assert!(board.get(r, c).map_or(false, |cell| cell.is_piece()));
        board.set(r, c, Cell::Empty);
    }

    let new_cells = occupied_cells(new_anchor, kind, orientation);
    let id = board.encode_id(new_anchor.0, new_anchor.1);
    let mut cells = new_cells.iter();
    let &(ar, ac) = cells.next().expect("footprint is never empty");
    board.set(ar, ac, Cell::Anchor { kind, team });
    for &(r, c) in cells {
        debug_assert!(board.is_empty(r, c), "relocation target ({r}, {c}) occupied");
        board.set(r, c, Cell::Extension { owner: id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_anchor(board: &mut Board, row: i8, col: i8, kind: PieceKind, team: Team) {
        board.set(row, col, Cell::Anchor { kind, team });
        let id = board.encode_id(row, col);
        for &(r, c) in &occupied_cells((row, col), kind, Orientation::Upright)[1..] {
            board.set(r, c, Cell::Extension { owner: id });
        }
    }

    #[test]
    fn test_required_cells_along_axis() {
        let need = required_cells((4, 4), PieceKind::Large, Orientation::Upright, Direction::Down);
        assert_eq!(need.as_slice(), &[(7, 4), (8, 4), (9, 4)]);

        let need = required_cells((4, 4), PieceKind::Large, Orientation::Upright, Direction::Up);
        assert_eq!(need.as_slice(), &[(3, 4), (2, 4), (1, 4)]);
    }

    #[test]
    fn test_required_cells_across_axis() {
        let need = required_cells((4, 4), PieceKind::Medium, Orientation::Upright, Direction::Left);
        assert_eq!(need.as_slice(), &[(4, 3), (5, 3)]);
    }

    #[test]
    fn test_required_cells_square() {
        let need = required_cells((4, 4), PieceKind::Square, Orientation::Upright, Direction::Right);
        assert_eq!(need.as_slice(), &[(4, 6), (5, 6)]);

        let need = required_cells((4, 4), PieceKind::Square, Orientation::Upright, Direction::Up);
        assert_eq!(need.as_slice(), &[(3, 4), (3, 5)]);
    }

    #[test]
    fn test_validate_never_mutates() {
        let mut board = Board::new(10, 8);
        place_anchor(&mut board, 4, 4, PieceKind::Medium, Team::Light);
        let before = board.clone();

        let _ = validate(&board, (4, 4), Direction::Right);
        let _ = validate(&board, (4, 4), Direction::Down);
        let _ = validate(&board, (0, 0), Direction::Left);
        assert_eq!(board, before);
    }
}
