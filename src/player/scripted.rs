use std::collections::VecDeque;

use crate::{game::PlayerId, grid::Board};

use super::TargetSource;

/// Replays tokens in order, one per turn, regardless of which player is active.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    moves: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl TargetSource for ScriptedSource {
    fn next_target(&mut self, _player: PlayerId, _tracking_grid: &Board) -> Option<String> {
        self.moves.pop_front()
    }
}
