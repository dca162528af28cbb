//! GameView tests - pure rendering of snapshots into text rows

use std::io::Cursor;

use sinkfall::setup::read_setup;
use sinkfall::term::{GameView, Tint};

#[test]
fn test_render_layout_and_glyphs() {
    let state = read_setup(
        Cursor::new(
            "blocked 0 0\n\
             sink 1 7 4\n\
             piece l a 4 4\n\
             #\n",
        ),
        8,
        8,
    )
    .unwrap();

    let view = GameView;
    let lines = view.render_plain(&state.snapshot());

    // Header, then alternating rule/row lines: 2 + 2*8 lines total.
    assert_eq!(lines.len(), 18);
    assert_eq!(lines[0], "    0  1  2  3  4  5  6  7");
    assert_eq!(lines[1], "  +--+--+--+--+--+--+--+--+");

    // Row 7 (top of the printout) carries the sink; row 0 the blocked cell.
    assert_eq!(lines[2], "7 |  |  |  |  | s|  |  |  |");
    assert_eq!(lines[8], "4 |  |  |  |  | a|  |  |  |");
    assert_eq!(lines[16], "0 | x|  |  |  |  |  |  |  |");
}

#[test]
fn test_render_extension_shows_owner_id() {
    let state = read_setup(Cursor::new("piece d b 3 3\n#\n"), 8, 8).unwrap();

    let view = GameView;
    let lines = view.render_plain(&state.snapshot());

    // Anchor at (3,3) prints 'B'; its extension at (4,3) prints id 27.
    assert_eq!(lines[10], "3 |  |  |  | B|  |  |  |  |");
    assert_eq!(lines[8], "4 |  |  |  |27|  |  |  |  |");
}

#[test]
fn test_tints_follow_cell_contents() {
    let state = read_setup(
        Cursor::new(
            "sink 1 7 4\n\
             piece l a 4 4\n\
             piece d a 4 5\n\
             #\n",
        ),
        8,
        8,
    )
    .unwrap();

    let view = GameView;
    let lines = view.render(&state.snapshot());

    // Row 7 line: spans alternate label/cell/separator; the sink cell is
    // span index 1 + 2*col.
    let row7 = &lines[2];
    assert_eq!(row7[1 + 2 * 4].tint, Tint::Sink);

    let row4 = &lines[8];
    assert_eq!(row4[1 + 2 * 4].tint, Tint::Light);
    assert_eq!(row4[1 + 2 * 5].tint, Tint::Dark);
}
