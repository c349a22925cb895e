//! Common types for the duel: shot outcomes and the errors raised by the core.

/// Result of resolving one target token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot landed on a ship segment.
    Hit,
    /// Shot landed on water.
    Miss,
    /// Token was malformed or out of range; nothing was marked.
    Invalid,
}

impl Outcome {
    /// What the console announces for this outcome. A rejected token counts as
    /// a miss for the shooter.
    pub fn announcement(&self) -> &'static str {
        match self {
            Outcome::Hit => "Hit!",
            Outcome::Miss | Outcome::Invalid => "Miss!",
        }
    }
}

/// Why a target token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// Token is not exactly two characters long.
    WrongLength(usize),
    /// First character is not one of `A`..=`J`.
    ColumnOutOfRange(char),
    /// Remainder of the token is not an integer.
    RowNotANumber,
    /// Row number is outside `1..=10`.
    RowOutOfRange(u32),
    /// Parsed coordinate does not address a cell of the board.
    OffBoard { row: usize, col: usize },
}

impl core::fmt::Display for TargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetError::WrongLength(len) => {
                write!(f, "Target must be 2 characters, got {}", len)
            }
            TargetError::ColumnOutOfRange(ch) => {
                write!(f, "Invalid column '{}' - must be a letter A-J", ch)
            }
            TargetError::RowNotANumber => write!(f, "Row must be a number"),
            TargetError::RowOutOfRange(row) => {
                write!(f, "Row {} out of bounds - must be 1-10", row)
            }
            TargetError::OffBoard { row, col } => {
                write!(f, "Cell row={}, col={} is off the board", row, col)
            }
        }
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship would run past the edge of the board.
    ShipOutOfBounds,
    /// Ship would share a cell with an already placed ship.
    ShipOverlaps,
    /// Random placement exhausted its attempt budget.
    UnableToPlaceShip { length: usize },
    /// A turn was requested after the game ended.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Index out of bounds: row={}, col={}", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
