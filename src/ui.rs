//! Text rendering of boards.

use std::fmt::Write;

use crate::board::{Board, Cell};
use crate::config::{Glyphs, BOARD_SIZE};

/// Character for one cell. With `reveal` unset, intact ship segments are
/// drawn as open water.
pub fn cell_glyph(cell: Cell, glyphs: &Glyphs, reveal: bool) -> char {
    match cell {
        Cell::Empty => glyphs.empty,
        Cell::Ship(_) if reveal => glyphs.ship,
        Cell::Ship(_) => glyphs.empty,
        Cell::Hit => glyphs.hit,
        Cell::Miss => glyphs.miss,
        Cell::Destroyed => glyphs.destroyed,
    }
}

/// Render `board` under a column header, one row per line, each row
/// prefixed with its index.
pub fn render_board(board: &Board, glyphs: &Glyphs, reveal: bool) -> String {
    let mut out = String::from(" ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{}", r);
        for c in 0..BOARD_SIZE {
            let cell = board.cell(r, c).unwrap_or(Cell::Empty);
            let _ = write!(out, " {}", cell_glyph(cell, glyphs, reveal));
        }
        out.push('\n');
    }
    out
}

/// Own board (revealed) above the opponent board (concealed).
pub fn render_views(own: &Board, opponent: &Board, glyphs: &Glyphs, opponent_label: &str) -> String {
    format!(
        "My ships:\n{}\n{}:\n{}",
        render_board(own, glyphs, true),
        opponent_label,
        render_board(opponent, glyphs, false)
    )
}
