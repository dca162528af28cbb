//! Read-only snapshot of a game, consumed by renderers.
//!
//! Snapshots are plain data with a fixed-size cell buffer so callers can
//! keep one and refresh it every turn without allocating.

use crate::types::{Cell, Team, GRID_CAP, MIN_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub height: u8,
    pub width: u8,
    /// Row-major cell contents; only the first `height * width` entries are
    /// meaningful.
    pub cells: [Cell; GRID_CAP],
    pub light_sunk: u8,
    pub dark_sunk: u8,
    pub to_move: Team,
    pub winner: Option<Team>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            height: MIN_DIM,
            width: MIN_DIM,
            cells: [Cell::Empty; GRID_CAP],
            light_sunk: 0,
            dark_sunk: 0,
            to_move: Team::Light,
            winner: None,
        }
    }
}

impl GameSnapshot {
    /// Cell at (row, col); `None` if out of bounds
    pub fn cell(&self, row: i8, col: i8) -> Option<Cell> {
        if row < 0 || row >= self.height as i8 || col < 0 || col >= self.width as i8 {
            return None;
        }
        Some(self.cells[(row as usize) * (self.width as usize) + (col as usize)])
    }
}
