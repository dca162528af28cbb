//! Terminal game runner.
//!
//! Reads the board setup and then move commands from stdin, re-printing the
//! board after every applied move. Usage: `sinkfall <height> <width>` with
//! both dimensions in 8..=10.

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Result;

use sinkfall::core::{GameSnapshot, GameState};
use sinkfall::setup::read_setup;
use sinkfall::term::{BoardRenderer, GameView};
use sinkfall::types::{Direction, MAX_DIM, MIN_DIM};

fn print_usage() {
    eprintln!("Usage: sinkfall <height> <width>");
    eprintln!("  <height>: board height ({MIN_DIM}-{MAX_DIM})");
    eprintln!("  <width>:  board width ({MIN_DIM}-{MAX_DIM})");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let dims: Option<(u8, u8)> = match args.as_slice() {
        [h, w] => h.parse().ok().zip(w.parse().ok()),
        _ => None,
    };
    let Some((height, width)) = dims else {
        print_usage();
        return ExitCode::FAILURE;
    };
    if !(MIN_DIM..=MAX_DIM).contains(&height) || !(MIN_DIM..=MAX_DIM).contains(&width) {
        eprintln!("ERROR: height and width must be {MIN_DIM}, 9, or {MAX_DIM}");
        return ExitCode::FAILURE;
    }

    match run(height, width) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(height: u8, width: u8) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut state = read_setup(&mut input, height, width)?;

    let view = GameView;
    let mut renderer = BoardRenderer::new();
    let mut snapshot = GameSnapshot::default();

    draw(&state, &view, &mut renderer, &mut snapshot)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            draw(&state, &view, &mut renderer, &mut snapshot)?;
            println!("Partial game");
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((anchor, dir)) = parse_move(trimmed) else {
            println!("ERROR: invalid move format");
            continue;
        };
        let Some(dir) = dir else {
            println!("ERROR: invalid direction");
            continue;
        };

        match state.submit_move(anchor, dir) {
            Err(reason) => {
                println!("ERROR: {reason}");
                continue;
            }
            Ok(report) => {
                draw(&state, &view, &mut renderer, &mut snapshot)?;
                for piece in &report.sunk {
                    println!("Sunk: {} {}", piece.team, piece.kind);
                }
            }
        }

        if let Some(team) = state.winner() {
            println!("{} wins", capitalize(team.as_str()));
            return Ok(());
        }

        state.switch_player();
        println!("Next player: {}", state.current_player());
    }
}

/// Parse `<row> <col> <direction-letter>`; outer `None` is a format error,
/// inner `None` a bad direction letter.
fn parse_move(line: &str) -> Option<((i8, i8), Option<Direction>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col, dir] = tokens.as_slice() else {
        return None;
    };
    let row: i8 = row.parse().ok()?;
    let col: i8 = col.parse().ok()?;
    Some(((row, col), Direction::from_letter(dir)))
}

fn draw(
    state: &GameState,
    view: &GameView,
    renderer: &mut BoardRenderer,
    snapshot: &mut GameSnapshot,
) -> Result<()> {
    state.snapshot_into(snapshot);
    renderer.draw(&view.render(snapshot))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
