//! Cursor movement for keyboard navigation.

use crate::board::{BOARD_SIZE, Coord};
use crossterm::event::KeyCode;

/// Moves the cursor one cell, clamped to the board edges.
///
/// Arrow keys and vi-style hjkl both work; any other key leaves the cursor
/// where it is.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let Coord { row, col } = cursor;
    match key {
        KeyCode::Up | KeyCode::Char('k') => Coord::new(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Coord::new((row + 1).min(BOARD_SIZE - 1), col),
        KeyCode::Left | KeyCode::Char('h') => Coord::new(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Coord::new(row, (col + 1).min(BOARD_SIZE - 1)),
        _ => cursor,
    }
}
