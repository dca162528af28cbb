//! Footprint model - derives the cells a piece occupies.
//!
//! Orientation is never stored. For Medium/Large pieces it is inferred from
//! which neighbor of the anchor carries the matching footprint id, so the
//! stored grid is the single source of truth and cannot desync from a flag.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Cell, Orientation, PieceKind};

/// Maximum cells in any footprint (Square)
pub const MAX_FOOTPRINT: usize = 4;

pub type Footprint = ArrayVec<(i8, i8), MAX_FOOTPRINT>;

/// Infer the orientation of the piece anchored at (row, col).
///
/// Single and Square have no long axis and report `Upright`. A Medium/Large
/// anchor with no extensions yet (valid only immediately after setup
/// placement) also defaults to `Upright`.
pub fn orientation_of(board: &Board, row: i8, col: i8) -> Orientation {
    let id = board.encode_id(row, col);
    if board.get(row, col + 1) == Some(Cell::Extension { owner: id }) {
        Orientation::Lying
    } else {
        // Covers the matching below-extension and the extension-less
        // degenerate state alike.
        Orientation::Upright
    }
}

/// The ordered cells a piece covers, anchor first.
///
/// Pure geometry: does not consult the board, so it describes both a current
/// footprint and a candidate placement.
pub fn occupied_cells(anchor: (i8, i8), kind: PieceKind, orientation: Orientation) -> Footprint {
    let (row, col) = anchor;
    let mut cells = Footprint::new();
    cells.push(anchor);
    match kind {
        PieceKind::Single => {}
        PieceKind::Medium | PieceKind::Large => {
            for i in 1..kind.body_len() {
                match orientation {
                    Orientation::Upright => cells.push((row + i, col)),
                    Orientation::Lying => cells.push((row, col + i)),
                }
            }
        }
        PieceKind::Square => {
            cells.push((row, col + 1));
            cells.push((row + 1, col));
            cells.push((row + 1, col + 1));
        }
    }
    cells
}

/// Footprint of the piece as it currently sits on the board
pub fn footprint_at(board: &Board, row: i8, col: i8, kind: PieceKind) -> Footprint {
    occupied_cells((row, col), kind, orientation_of(board, row, col))
}
