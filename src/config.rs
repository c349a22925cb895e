//! Fixed game parameters.

pub const BOARD_SIZE: usize = 10;

/// Ship lengths, in the order they are placed.
pub const FLEET: [usize; 4] = [2, 3, 4, 5];

/// Total number of ship segments in a fleet.
pub const FLEET_CELLS: usize = 2 + 3 + 4 + 5;

/// Random placement gives up on a ship after this many rejected candidates.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

pub const WATER_GLYPH: char = '~';
pub const SHIP_GLYPH: char = '1';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = '0';
