//! Terminal front end: pure view building plus a crossterm-backed writer.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Span, Tint};
pub use renderer::BoardRenderer;
