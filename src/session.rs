#![cfg(feature = "std")]

//! Drives a [`GameState`] to completion from a [`TargetSource`].

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    common::{BoardError, Outcome},
    game::{GameState, Phase, PlayerId},
    player::TargetSource,
};

/// Per-game tallies, indexed by player (`[Player 1, Player 2]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub winner: Option<PlayerId>,
    pub turns: usize,
    pub hits: [usize; 2],
    pub misses: [usize; 2],
    pub invalid: [usize; 2],
    /// Final tracking grids, one string of glyphs per row.
    pub tracking: [Vec<String>; 2],
}

impl SessionSummary {
    fn record(&mut self, player: PlayerId, outcome: Outcome) {
        let idx = seat(player);
        match outcome {
            Outcome::Hit => self.hits[idx] += 1,
            Outcome::Miss => self.misses[idx] += 1,
            Outcome::Invalid => self.invalid[idx] += 1,
        }
    }
}

fn seat(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}

/// Play turns until the game ends or `source` runs dry.
pub fn run_session<S: TargetSource + ?Sized>(
    state: &mut GameState,
    source: &mut S,
) -> Result<SessionSummary, BoardError> {
    let mut summary = SessionSummary::default();
    while let Some(player) = state.active_player() {
        let tracking = state.boards(player).tracking_grid;
        let token = match source.next_target(player, &tracking) {
            Some(token) => token,
            None => {
                info!("target source exhausted after {} turns", state.turns());
                break;
            }
        };
        let report = state.take_turn(&token)?;
        summary.record(player, report.outcome);
        source.handle_outcome(player, report.outcome);
        if let Phase::GameOver { winner } = report.phase {
            source.handle_game_over(winner);
        }
    }

    summary.winner = match state.phase() {
        Phase::GameOver { winner } => Some(winner),
        _ => None,
    };
    summary.turns = state.turns();
    for player in [PlayerId::One, PlayerId::Two] {
        summary.tracking[seat(player)] = state
            .boards(player)
            .tracking_grid
            .render()
            .iter()
            .map(|row| row.iter().collect())
            .collect();
    }
    Ok(summary)
}
