//! Commonly used types and utilities for ease of import.

pub use crate::{fire, is_fleet_sunk, place_fleet, Board, Cell, GameState, Outcome, PlayerId};

#[cfg(feature = "std")]
pub use crate::{run_session, ConsoleSource, ScriptedSource, TargetSource};
