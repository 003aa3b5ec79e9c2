//! Core board types for the 15x15 Gomoku grid.

use serde::{Deserialize, Serialize};

/// Board side length. The server only speaks 15x15.
pub const BOARD_SIZE: usize = 15;

/// Contents of a single board cell.
///
/// Wire form is an integer: 0 empty, 1 player stone, 2 opponent stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// No stone.
    Empty,
    /// Stone placed by the local player (black).
    Player,
    /// Stone placed by the remote opponent (white).
    Opponent,
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Player => 1,
            Cell::Opponent => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Player),
            2 => Ok(Cell::Opponent),
            other => Err(format!("invalid cell value {other}, expected 0, 1 or 2")),
        }
    }
}

/// A board coordinate, also used as the TUI cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Callers keep values in range; `Board::get`
    /// bounds-checks regardless.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// 15x15 Gomoku board.
///
/// The client never mutates a board in place: each server response carries a
/// complete replacement, so the displayed grid cannot drift from the
/// authoritative one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            rows: vec![vec![Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinate, `None` when out of range.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Whether the cell at the given coordinate exists and is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of occupied cells.
    pub fn stone_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Builds a board with stones at the given coordinates.
    ///
    /// # Panics
    /// Panics if a coordinate is out of range.
    pub fn with_stones(stones: &[(Coord, Cell)]) -> Self {
        let mut board = Self::new();
        for (coord, cell) in stones {
            board.rows[coord.row][coord.col] = *cell;
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = String;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(format!(
                "board has {} rows, expected {BOARD_SIZE}",
                rows.len()
            ));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != BOARD_SIZE) {
            return Err(format!(
                "board row has {} cells, expected {BOARD_SIZE}",
                row.len()
            ));
        }
        Ok(Self { rows })
    }
}
