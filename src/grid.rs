//! Fixed-size 10×10 grid of cell states.
//!
//! The same type backs both kinds of player board. A ship grid only ever
//! holds [`Cell::Water`] and [`Cell::Ship`]; a tracking grid holds
//! [`Cell::Water`] (not fired upon yet), [`Cell::Hit`] and [`Cell::Miss`].

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, HIT_GLYPH, MISS_GLYPH, SHIP_GLYPH, WATER_GLYPH};
use core::fmt;

/// State of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Water,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Console glyph for this cell.
    pub fn glyph(&self) -> char {
        match self {
            Cell::Water => WATER_GLYPH,
            Cell::Ship => SHIP_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }
}

/// Glyph matrix handed to the console for printing.
pub type Snapshot = [[char; BOARD_SIZE]; BOARD_SIZE];

/// A 10×10 board indexed as `cells[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell set to water.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
    }

    /// Raw rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Glyph snapshot of every cell, ship markers included.
    pub fn render(&self) -> Snapshot {
        self.cells.map(|row| row.map(|cell| cell.glyph()))
    }

    /// Glyph snapshot safe to show to the opponent: ship segments render as water.
    pub fn render_concealed(&self) -> Snapshot {
        self.cells.map(|row| {
            row.map(|cell| match cell {
                Cell::Ship => WATER_GLYPH,
                other => other.glyph(),
            })
        })
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Return a freshly initialized, all-water board.
pub fn initialize() -> Board {
    Board::new()
}

/// Console layout: a column header line, then one line per row labelled with
/// its internal index.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{} ", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", r)?;
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
