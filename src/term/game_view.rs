//! GameView: maps a `GameSnapshot` into styled text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::types::{Cell, Team};

/// Color class of a span; the renderer maps these to terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Default,
    Blocked,
    Sink,
    Light,
    Dark,
}

/// A run of characters sharing one tint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tint: Tint,
}

impl Span {
    fn new(text: impl Into<String>, tint: Tint) -> Self {
        Self {
            text: text.into(),
            tint,
        }
    }
}

/// Renders the board as a bordered character grid, row 0 at the bottom
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into lines of styled spans, top line first
    pub fn render(&self, snap: &GameSnapshot) -> Vec<Vec<Span>> {
        let width = snap.width as usize;
        let mut lines = Vec::with_capacity(2 * snap.height as usize + 2);

        // Column header.
        let mut header = String::from("    ");
        for col in 0..width {
            if col > 0 {
                header.push_str("  ");
            }
            header.push_str(&col.to_string());
        }
        lines.push(vec![Span::new(header, Tint::Default)]);
        lines.push(vec![Span::new(rule_line(width), Tint::Default)]);

        // Rows top-down so that row 0 prints at the bottom.
        for row in (0..snap.height as i8).rev() {
            let mut line = Vec::with_capacity(2 * width + 1);
            line.push(Span::new(format!("{row} |"), Tint::Default));
            for col in 0..width as i8 {
                let (text, tint) = cell_glyph(snap, row, col);
                line.push(Span::new(text, tint));
                line.push(Span::new("|", Tint::Default));
            }
            lines.push(line);
            lines.push(vec![Span::new(rule_line(width), Tint::Default)]);
        }
        lines
    }

    /// Plain-text rendering with tints dropped (tests, non-tty output)
    pub fn render_plain(&self, snap: &GameSnapshot) -> Vec<String> {
        self.render(snap)
            .into_iter()
            .map(|spans| spans.into_iter().map(|s| s.text).collect())
            .collect()
    }
}

fn rule_line(width: usize) -> String {
    let mut s = String::from("  ");
    for _ in 0..width {
        s.push_str("+--");
    }
    s.push('+');
    s
}

/// Two-character glyph and tint for one cell
fn cell_glyph(snap: &GameSnapshot, row: i8, col: i8) -> (String, Tint) {
    match snap.cell(row, col).unwrap_or(Cell::Empty) {
        Cell::Empty => ("  ".to_string(), Tint::Default),
        Cell::Blocked => (" x".to_string(), Tint::Blocked),
        Cell::Sink => (" s".to_string(), Tint::Sink),
        Cell::Anchor { kind, team } => {
            let tint = match team {
                Team::Light => Tint::Light,
                Team::Dark => Tint::Dark,
            };
            (format!(" {}", kind.symbol(team)), tint)
        }
        Cell::Extension { owner } => {
            let tint = match owner_team(snap, owner) {
                Some(Team::Light) => Tint::Light,
                Some(Team::Dark) => Tint::Dark,
                None => Tint::Default,
            };
            (format!("{owner:>2}"), tint)
        }
    }
}

fn owner_team(snap: &GameSnapshot, owner: u8) -> Option<Team> {
    let row = (owner / snap.width) as i8;
    let col = (owner % snap.width) as i8;
    match snap.cell(row, col) {
        Some(Cell::Anchor { team, .. }) => Some(team),
        _ => None,
    }
}
