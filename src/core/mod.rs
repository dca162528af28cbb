//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod moves;
pub mod pieces;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, MoveReport, SetupError};
pub use gravity::{resolve_sinks, settle, SunkPiece};
pub use moves::{execute, validate, MoveError};
pub use pieces::{footprint_at, occupied_cells, orientation_of};
pub use snapshot::GameSnapshot;
