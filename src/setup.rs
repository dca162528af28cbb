//! Board setup reader.
//!
//! Builds a `GameState` from the text setup format: one token per line,
//! terminated by a `#` sentinel.
//!
//! ```text
//! blocked <row> <col>
//! sink <size> <row> <col>
//! piece <l|d> <a|b|c|d> <row> <col>
//! #
//! ```
//!
//! Sinks are confined to the outer border rings, pieces to the inner region
//! at least three cells from every edge. Off-board coordinates are skipped
//! silently; zone violations are errors. Piece extensions are written after
//! every line has been read, so terrain placed later in the file still
//! shapes a piece's initial orientation.

use std::io::BufRead;

use crate::core::{GameState, SetupError};
use crate::types::{PieceKind, Team, PLACEMENT_MARGIN, SETUP_SENTINEL};

/// Sinks must touch the outer border rings
fn in_sink_zone(height: i8, width: i8, row: i8, col: i8) -> bool {
    row < PLACEMENT_MARGIN
        || row >= height - PLACEMENT_MARGIN
        || col < PLACEMENT_MARGIN
        || col >= width - PLACEMENT_MARGIN
}

/// Pieces must start in the inner region
fn in_piece_zone(height: i8, width: i8, row: i8, col: i8) -> bool {
    row >= PLACEMENT_MARGIN
        && row < height - PLACEMENT_MARGIN
        && col >= PLACEMENT_MARGIN
        && col < width - PLACEMENT_MARGIN
}

fn parse_coord(token: &str, line: &str) -> Result<i8, SetupError> {
    token
        .parse::<i8>()
        .map_err(|_| SetupError::Malformed(line.to_string()))
}

/// Read the setup section from `input` and build the initial game state.
///
/// Stops at the sentinel line, leaving the rest of the stream to the caller;
/// EOF before the sentinel ends the setup as if it were read.
pub fn read_setup<R: BufRead>(mut input: R, height: u8, width: u8) -> Result<GameState, SetupError> {
    let mut state = GameState::new(height, width);
    let (h, w) = (height as i8, width as i8);
    let mut pieces: Vec<(PieceKind, Team, i8, i8)> = Vec::new();

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed == SETUP_SENTINEL {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            ["blocked", row, col] => {
                let row = parse_coord(row, trimmed)?;
                let col = parse_coord(col, trimmed)?;
                state.place_blocked(row, col);
            }
            ["sink", size, row, col] => {
                let size = parse_coord(size, trimmed)?;
                let row = parse_coord(row, trimmed)?;
                let col = parse_coord(col, trimmed)?;
                if row < 0 || row >= h || col < 0 || col >= w {
                    continue;
                }
                if !in_sink_zone(h, w, row, col) {
                    return Err(SetupError::InvalidPlacementZone("sink"));
                }
                state.place_sink(size, row, col);
            }
            ["piece", team, kind, row, col] => {
                let team = Team::from_letter(team)
                    .ok_or_else(|| SetupError::Malformed(trimmed.to_string()))?;
                let kind = PieceKind::from_letter(kind)
                    .ok_or_else(|| SetupError::Malformed(trimmed.to_string()))?;
                let row = parse_coord(row, trimmed)?;
                let col = parse_coord(col, trimmed)?;
                if row < 0 || row >= h || col < 0 || col >= w {
                    continue;
                }
                if !in_piece_zone(h, w, row, col) {
                    return Err(SetupError::InvalidPlacementZone("piece"));
                }
                pieces.push((kind, team, row, col));
            }
            _ => return Err(SetupError::Malformed(trimmed.to_string())),
        }
    }

    for (kind, team, row, col) in pieces {
        state.place(kind, team, (row, col))?;
    }
    Ok(state)
}
