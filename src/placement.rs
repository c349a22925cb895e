//! Random, non-overlapping fleet placement.
//!
//! Orientation names follow the console game's convention:
//! a [`Orientation::Horizontal`] ship keeps its column fixed and extends down
//! the row index, a [`Orientation::Vertical`] ship keeps its row fixed and
//! extends along the column index.

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{Board, Cell};
use log::{debug, trace};
use rand::Rng;

/// Axis along which a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row index: cells `(row + i, col)`.
    Horizontal,
    /// Extends along the column index: cells `(row, col + i)`.
    Vertical,
}

impl Orientation {
    /// Cell `i` of a ship with origin (row, col).
    fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row + i, col),
            Orientation::Vertical => (row, col + i),
        }
    }
}

/// Returns `true` if a ship of `length` fits at (row, col) without leaving the
/// board or covering an existing ship segment.
pub fn can_place_ship(
    board: &Board,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    let far_edge = match orientation {
        Orientation::Horizontal => row + length,
        Orientation::Vertical => col + length,
    };
    if far_edge > BOARD_SIZE {
        return false;
    }
    (0..length).all(|i| {
        let (r, c) = orientation.step(row, col, i);
        board.get(r, c).map(|cell| cell != Cell::Ship).unwrap_or(false)
    })
}

/// Write a ship of `length` onto the board at (row, col).
pub fn place_ship(
    board: &mut Board,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<(), BoardError> {
    let far_edge = match orientation {
        Orientation::Horizontal => row + length,
        Orientation::Vertical => col + length,
    };
    if row >= BOARD_SIZE || col >= BOARD_SIZE || far_edge > BOARD_SIZE {
        return Err(BoardError::ShipOutOfBounds);
    }
    if !can_place_ship(board, row, col, length, orientation) {
        return Err(BoardError::ShipOverlaps);
    }
    for i in 0..length {
        let (r, c) = orientation.step(row, col, i);
        board.set(r, c, Cell::Ship)?;
    }
    Ok(())
}

/// Sample origins and orientations until one passes [`can_place_ship`].
///
/// Origins are drawn from the whole board, so candidates that run off the
/// edge are rejected and redrawn like overlapping ones.
pub fn random_placement<R: Rng>(
    board: &Board,
    rng: &mut R,
    length: usize,
) -> Result<(usize, usize, Orientation), BoardError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        let orientation = if rng.random_range(0..2) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if can_place_ship(board, row, col, length, orientation) {
            trace!("length {} fits at ({}, {}) after {} attempts", length, row, col, attempt);
            return Ok((row, col, orientation));
        }
    }
    debug!(
        "gave up placing length {} after {} attempts",
        length, MAX_PLACEMENT_ATTEMPTS
    );
    Err(BoardError::UnableToPlaceShip { length })
}

/// Place every ship of [`FLEET`] at random on `board`.
pub fn place_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for &length in FLEET.iter() {
        let (row, col, orientation) = random_placement(board, rng, length)?;
        place_ship(board, row, col, length, orientation)?;
        debug!(
            "placed length {} at ({}, {}) {:?}",
            length, row, col, orientation
        );
    }
    Ok(())
}
