//! sinkfall - a turn-based gravity board game.
//!
//! Pieces of varying footprint slide one step at a time on a small grid,
//! fall under gravity, and score by landing on sink cells; the first side to
//! sink four pieces wins. `core` holds the engine, `setup` the board
//! description reader, `term` the terminal front end.

pub mod core;
pub mod setup;
pub mod term;
pub mod types;
