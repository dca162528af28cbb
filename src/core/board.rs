//! Board module - manages the game grid
//!
//! The board is an HxW grid (H, W in 8..=10) where each cell holds a `Cell`
//! variant. Uses a flat array sized for the largest board for cache locality
//! and zero-allocation; smaller boards leave the tail unused.
//! Coordinates: (row, col) with row 0 at the visual bottom when rendered;
//! internally rows grow in the direction of gravity.

use crate::types::{Cell, GRID_CAP, MAX_DIM, MIN_DIM};

/// The game board - flat array storage, row-major order (row * width + col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: u8,
    width: u8,
    cells: [Cell; GRID_CAP],
}

impl Board {
    /// Create a new empty board.
    ///
    /// Panics when a dimension is outside 8..=10; callers validate user
    /// input before construction.
    pub fn new(height: u8, width: u8) -> Self {
        assert!(
            (MIN_DIM..=MAX_DIM).contains(&height) && (MIN_DIM..=MAX_DIM).contains(&width),
            "board dimensions must be within {MIN_DIM}..={MAX_DIM}, got {height}x{width}"
        );
        Self {
            height,
            width,
            cells: [Cell::Empty; GRID_CAP],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.height as i8 || col < 0 || col >= self.width as i8 {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        self.index(row, col).is_some()
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Encode an anchor coordinate into the footprint id written into its
    /// extension cells. Only valid for in-bounds coordinates.
    pub fn encode_id(&self, row: i8, col: i8) -> u8 {
        debug_assert!(self.in_bounds(row, col));
        (row as u8) * self.width + (col as u8)
    }

    /// Decode a footprint id back into its anchor coordinate
    pub fn decode_id(&self, id: u8) -> (i8, i8) {
        ((id / self.width) as i8, (id % self.width) as i8)
    }

    /// Resolve the cell at (row, col) to the anchor coordinate of the piece
    /// occupying it, if any.
    ///
    /// Panics when an extension's back-reference does not lead to an anchor:
    /// that is engine corruption, never a recoverable game state.
    pub fn anchor_of(&self, row: i8, col: i8) -> Option<(i8, i8)> {
        match self.get(row, col)? {
            Cell::Anchor { .. } => Some((row, col)),
            Cell::Extension { owner } => {
                let (ar, ac) = self.decode_id(owner);
                match self.get(ar, ac) {
                    Some(Cell::Anchor { .. }) => Some((ar, ac)),
                    _ => panic!(
                        "extension at ({row}, {col}) references ({ar}, {ac}) which holds no anchor"
                    ),
                }
            }
            _ => None,
        }
    }

    /// Get a reference to the used portion of the internal cell array
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..(self.height as usize) * (self.width as usize)]
    }

    /// Copy the used portion of the grid into a caller-owned buffer
    pub fn write_cells(&self, out: &mut [Cell; GRID_CAP]) {
        out[..self.cells().len()].copy_from_slice(self.cells());
        for cell in &mut out[self.cells().len()..] {
            *cell = Cell::Empty;
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }
}
