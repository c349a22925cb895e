//! Target token parsing and shot resolution.

use crate::common::{Outcome, TargetError};
use crate::config::BOARD_SIZE;
use crate::grid::{Board, Cell};
use log::debug;

/// A validated board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub row: usize,
    pub col: usize,
}

/// Parse a token such as `A5` into a [`Target`].
///
/// The token must be exactly two characters: an uppercase column letter
/// `A`..=`J` and a row number in `1..=10`. The row number is used as the row
/// index directly, so row index 0 can never be addressed. Together with the
/// two-character limit this leaves row indices 1 through 9 reachable.
pub fn parse_target(input: &str) -> Result<Target, TargetError> {
    let len = input.chars().count();
    if len != 2 {
        return Err(TargetError::WrongLength(len));
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(TargetError::WrongLength(0))?;
    if !('A'..='J').contains(&col_ch) {
        return Err(TargetError::ColumnOutOfRange(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: u32 = chars
        .as_str()
        .parse()
        .map_err(|_| TargetError::RowNotANumber)?;
    if !(1..=10).contains(&row) {
        return Err(TargetError::RowOutOfRange(row));
    }
    let row = row as usize;
    if row >= BOARD_SIZE {
        return Err(TargetError::OffBoard { row, col });
    }
    Ok(Target { row, col })
}

/// Resolve a shot described by `input` against `target_grid`, recording the
/// result on `tracking_grid`.
///
/// Invalid tokens leave both grids untouched and report [`Outcome::Invalid`].
/// Firing at a cell that was already fired upon records the same result again.
pub fn fire(input: &str, target_grid: &Board, tracking_grid: &mut Board) -> Outcome {
    let target = match parse_target(input) {
        Ok(t) => t,
        Err(e) => {
            debug!("rejected target {:?}: {}", input, e);
            return Outcome::Invalid;
        }
    };
    resolve(target, target_grid, tracking_grid)
}

/// Resolve a shot at an already validated coordinate.
pub fn resolve(target: Target, target_grid: &Board, tracking_grid: &mut Board) -> Outcome {
    let (mark, outcome) = match target_grid.get(target.row, target.col) {
        Ok(Cell::Ship) => (Cell::Hit, Outcome::Hit),
        Ok(Cell::Water) => (Cell::Miss, Outcome::Miss),
        // Ship grids never carry shot marks.
        Ok(Cell::Hit) | Ok(Cell::Miss) | Err(_) => return Outcome::Invalid,
    };
    match tracking_grid.set(target.row, target.col, mark) {
        Ok(()) => outcome,
        Err(_) => Outcome::Invalid,
    }
}
