//! Game state module - ties the board, scoring, and turn state together.
//!
//! One `GameState` owns one game's grid exclusively. Callers submit moves
//! and read back snapshots; nothing else mutates the board.

use thiserror::Error;

use crate::core::gravity::{resolve_sinks, settle, SunkPiece};
use crate::core::moves::{self, MoveError};
use crate::core::pieces::occupied_cells;
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::types::{Cell, Direction, Orientation, PieceKind, Team, WIN_TARGET};

/// Why a setup-time placement was rejected
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("piece footprint overlaps an occupied cell or leaves the board")]
    Overlap,
    #[error("{0} in the wrong position")]
    InvalidPlacementZone(&'static str),
    #[error("anchor out of bounds")]
    OutOfBounds,
    #[error("malformed setup line: {0:?}")]
    Malformed(String),
    #[error("failed to read setup")]
    Io(#[from] std::io::Error),
}

/// Everything that happened as a result of one applied move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Pieces removed by sinks after the board settled
    pub sunk: Vec<SunkPiece>,
    /// Points credited this move: [light, dark]
    pub score_delta: [u8; 2],
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    light_sunk: u8,
    dark_sunk: u8,
    current_player: Team,
    move_count: u32,
}

impl GameState {
    /// Create a new game on an empty height x width board.
    ///
    /// Dimensions must be within 8..=10 (asserted by `Board::new`); the CLI
    /// validates user input before construction.
    pub fn new(height: u8, width: u8) -> Self {
        Self {
            board: Board::new(height, width),
            light_sunk: 0,
            dark_sunk: 0,
            current_player: Team::Light,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Team {
        self.current_player
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Sunk-piece counter for one team
    pub fn sunk_count(&self, team: Team) -> u8 {
        match team {
            Team::Light => self.light_sunk,
            Team::Dark => self.dark_sunk,
        }
    }

    /// The winning team, once its counter reaches the target
    pub fn winner(&self) -> Option<Team> {
        if self.light_sunk >= WIN_TARGET {
            Some(Team::Light)
        } else if self.dark_sunk >= WIN_TARGET {
            Some(Team::Dark)
        } else {
            None
        }
    }

    /// Reset to an empty board and zeroed counters
    pub fn reset(&mut self) {
        self.board.clear();
        self.light_sunk = 0;
        self.dark_sunk = 0;
        self.current_player = Team::Light;
        self.move_count = 0;
    }

    /// Setup-time placement: write an anchor plus its initial extensions
    /// without going through move validation.
    ///
    /// Medium/Large prefer Upright and fall back to Lying when the cells
    /// below are unavailable. Placement-zone rules are the setup reader's
    /// concern; here only footprint-in-bounds and no-overlap are enforced.
    pub fn place(&mut self, kind: PieceKind, team: Team, anchor: (i8, i8)) -> Result<(), SetupError> {
        let (row, col) = anchor;
        if !self.board.in_bounds(row, col) {
            return Err(SetupError::OutOfBounds);
        }

        let orientations: &[Orientation] = if kind.is_oriented() {
            &[Orientation::Upright, Orientation::Lying]
        } else {
            &[Orientation::Upright]
        };

        for &orientation in orientations {
            let cells = occupied_cells(anchor, kind, orientation);
            if !cells.iter().all(|&(r, c)| self.board.is_empty(r, c)) {
                continue;
            }

            let mut it = cells.iter();
            let &(ar, ac) = it.next().expect("footprint is never empty");
            self.board.set(ar, ac, Cell::Anchor { kind, team });
            let id = self.board.encode_id(ar, ac);
            for &(r, c) in it {
                self.board.set(r, c, Cell::Extension { owner: id });
            }
            return Ok(());
        }
        Err(SetupError::Overlap)
    }

    /// Write a blocked cell during setup. Off-board coordinates are ignored
    /// (the setup format tolerates them).
    pub fn place_blocked(&mut self, row: i8, col: i8) {
        if self.board.is_empty(row, col) {
            self.board.set(row, col, Cell::Blocked);
        }
    }

    /// Write a size x size block of sink cells, clipped to the board
    pub fn place_sink(&mut self, size: i8, row: i8, col: i8) {
        for r in row..(row + size).min(self.board.height() as i8) {
            for c in col..(col + size).min(self.board.width() as i8) {
                if self.board.is_empty(r, c) {
                    self.board.set(r, c, Cell::Sink);
                }
            }
        }
    }

    /// Validate and apply one move, then settle gravity and resolve sinks.
    ///
    /// A rejected move leaves the board byte-for-byte unchanged. Once a
    /// winner exists every further move is rejected with `GameOver`.
    pub fn submit_move(
        &mut self,
        anchor: (i8, i8),
        dir: Direction,
    ) -> Result<MoveReport, MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }

        moves::execute(&mut self.board, anchor, dir)?;
        settle(&mut self.board);
        let sunk = resolve_sinks(&mut self.board);

        let mut score_delta = [0u8; 2];
        for piece in &sunk {
            match piece.team {
                Team::Light => {
                    self.light_sunk += 1;
                    score_delta[0] += 1;
                }
                Team::Dark => {
                    self.dark_sunk += 1;
                    score_delta[1] += 1;
                }
            }
        }
        self.move_count += 1;

        Ok(MoveReport { sunk, score_delta })
    }

    /// Write a read-only snapshot into a caller-owned buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.height = self.board.height();
        out.width = self.board.width();
        self.board.write_cells(&mut out.cells);
        out.light_sunk = self.light_sunk;
        out.dark_sunk = self.dark_sunk;
        out.to_move = self.current_player;
        out.winner = self.winner();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
