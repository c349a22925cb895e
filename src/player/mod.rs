//! Sources of target tokens.
//!
//! The core only ever sees raw tokens. A [`TargetSource`] is whatever supplies
//! them for the active player:
//! - ConsoleSource: prompts on a writer and reads lines from a reader
//! - ScriptedSource: replays a fixed list of tokens

use crate::{common::Outcome, game::PlayerId, grid::Board};

/// Interface implemented by the different token suppliers.
pub trait TargetSource {
    /// Next raw token for `player`, who sees `tracking_grid`. `None` means
    /// the source is exhausted and the session should stop.
    fn next_target(&mut self, player: PlayerId, tracking_grid: &Board) -> Option<String>;

    /// Inform the source of how the last token resolved.
    fn handle_outcome(&mut self, _player: PlayerId, _outcome: Outcome) {}

    /// Inform the source that the game ended.
    fn handle_game_over(&mut self, _winner: PlayerId) {}
}

pub mod console;
pub use console::ConsoleSource;

pub mod scripted;
pub use scripted::ScriptedSource;
