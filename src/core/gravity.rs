//! Gravity and sink resolution.
//!
//! After every executed move the board settles: whole footprints fall one
//! row at a time until nothing can fall, then sinks swallow whatever rests
//! directly on top of them. Footprints always move as a unit - shifting an
//! anchor while leaving stale extensions behind would corrupt the grid's
//! back-references.

use crate::core::moves::relocate;
use crate::core::pieces::{footprint_at, orientation_of};
use crate::core::Board;
use crate::types::{Cell, PieceKind, Team};

/// A piece removed by a sink, reported back to the caller for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkPiece {
    pub kind: PieceKind,
    pub team: Team,
    /// Anchor coordinate at the moment of removal
    pub anchor: (i8, i8),
}

/// Compact every piece downward until a full pass moves nothing.
///
/// Each pass scans anchors bottom-most first and shifts a footprint down one
/// row when every cell under it is empty (or part of the same footprint).
/// Reaches the fixpoint in at most `height` passes; idempotent once settled.
/// Returns the number of single-row shifts applied.
pub fn settle(board: &mut Board) -> u32 {
    let height = board.height() as i8;
    let width = board.width() as i8;
    let mut shifts = 0;

    loop {
        let mut moved = false;
        for row in (0..height).rev() {
            for col in 0..width {
                let Some(Cell::Anchor { kind, team }) = board.get(row, col) else {
                    continue;
                };
                let orientation = orientation_of(board, row, col);
                let cells = footprint_at(board, row, col, kind);

                let grounded = cells.iter().any(|&(r, c)| {
                    let below = (r + 1, c);
                    !cells.contains(&below) && !board.is_empty(below.0, below.1)
                });
                if grounded {
                    continue;
                }

                relocate(board, &cells, (row + 1, col), kind, team, orientation);
                moved = true;
                shifts += 1;
            }
        }
        if !moved {
            return shifts;
        }
    }
}

/// Remove every piece resting directly above a sink cell.
///
/// The whole footprint is cleared, whichever of its cells touched the sink.
/// Runs once (not to fixpoint): a removed piece is gone immediately, so no
/// piece can sink twice in one resolution pass. Callers re-settle and call
/// again on the next move.
pub fn resolve_sinks(board: &mut Board) -> Vec<SunkPiece> {
    let height = board.height() as i8;
    let width = board.width() as i8;
    let mut sunk = Vec::new();

    for row in 0..height {
        for col in 0..width {
            if board.get(row, col) != Some(Cell::Sink) {
                continue;
            }
            let Some((ar, ac)) = board.anchor_of(row - 1, col) else {
                continue;
            };
            let Some(Cell::Anchor { kind, team }) = board.get(ar, ac) else {
                unreachable!("anchor_of returned a non-anchor coordinate");
            };
            for &(r, c) in &footprint_at(board, ar, ac, kind) {
                board.set(r, c, Cell::Empty);
            }
            sunk.push(SunkPiece {
                kind,
                team,
                anchor: (ar, ac),
            });
        }
    }
    sunk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::occupied_cells;
    use crate::types::Orientation;

    fn place(board: &mut Board, row: i8, col: i8, kind: PieceKind, orientation: Orientation) {
        board.set(
            row,
            col,
            Cell::Anchor {
                kind,
                team: Team::Light,
            },
        );
        let id = board.encode_id(row, col);
        for &(r, c) in &occupied_cells((row, col), kind, orientation)[1..] {
            board.set(r, c, Cell::Extension { owner: id });
        }
    }

    #[test]
    fn test_single_falls_to_floor() {
        let mut board = Board::new(8, 8);
        place(&mut board, 3, 3, PieceKind::Single, Orientation::Upright);

        settle(&mut board);
        assert_eq!(board.get(3, 3), Some(Cell::Empty));
        assert!(matches!(board.get(7, 3), Some(Cell::Anchor { .. })));
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut board = Board::new(8, 8);
        place(&mut board, 3, 3, PieceKind::Large, Orientation::Upright);
        place(&mut board, 4, 6, PieceKind::Square, Orientation::Upright);

        settle(&mut board);
        let settled = board.clone();
        assert_eq!(settle(&mut board), 0);
        assert_eq!(board, settled);
    }

    #[test]
    fn test_lying_piece_rests_on_partial_support() {
        let mut board = Board::new(8, 8);
        board.set(7, 4, Cell::Blocked);
        place(&mut board, 3, 3, PieceKind::Medium, Orientation::Lying);

        settle(&mut board);
        // One column is plugged at the floor; the whole footprint rests on it.
        assert!(matches!(board.get(6, 3), Some(Cell::Anchor { .. })));
        assert!(matches!(board.get(6, 4), Some(Cell::Extension { .. })));
    }
}
