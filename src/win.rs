//! Fleet-sunk detection on tracking grids.

use crate::config::FLEET_CELLS;
use crate::grid::{Board, Cell};

/// Number of hits recorded on a tracking grid.
pub fn hit_count(tracking_grid: &Board) -> usize {
    tracking_grid.count(Cell::Hit)
}

/// Returns `true` once the tracking grid shows at least [`FLEET_CELLS`] hits,
/// regardless of where they are.
pub fn is_fleet_sunk(tracking_grid: &Board) -> bool {
    hit_count(tracking_grid) >= FLEET_CELLS
}
