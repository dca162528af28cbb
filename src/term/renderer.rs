//! BoardRenderer: flushes styled view lines to a real terminal.
//!
//! This stays line-oriented on purpose: the game redraws the whole board
//! after every move, so there is nothing to diff.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::term::game_view::{Span, Tint};

pub struct BoardRenderer {
    stdout: io::Stdout,
}

impl BoardRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Queue every span with its color and flush once
    pub fn draw(&mut self, lines: &[Vec<Span>]) -> Result<()> {
        for line in lines {
            for span in line {
                self.stdout.queue(SetForegroundColor(color_for(span.tint)))?;
                self.stdout.queue(Print(span.text.as_str()))?;
            }
            self.stdout.queue(Print("\n"))?;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color_for(tint: Tint) -> Color {
    match tint {
        Tint::Default => Color::Reset,
        Tint::Blocked => Color::Red,
        Tint::Sink => Color::Blue,
        Tint::Light => Color::Green,
        Tint::Dark => Color::DarkGrey,
    }
}
