//! Turn coordination: alternates the active player, resolves shots and decides
//! when the game ends.

use crate::{
    common::{BoardError, Outcome},
    grid::Board,
    placement::place_fleet,
    shot::fire,
    win::is_fleet_sunk,
};
use log::{debug, info};
use rand::Rng;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Seat number as printed on the console.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// A player's two boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBoards {
    /// Own ships. Never shown to the opponent.
    pub ship_grid: Board,
    /// Shots fired at the opponent.
    pub tracking_grid: Board,
}

/// Where the turn loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Player1Turn,
    Player2Turn,
    GameOver { winner: PlayerId },
}

impl Phase {
    /// Player expected to fire next, if the game is still running.
    pub fn active_player(self) -> Option<PlayerId> {
        match self {
            Phase::Player1Turn => Some(PlayerId::One),
            Phase::Player2Turn => Some(PlayerId::Two),
            Phase::GameOver { .. } => None,
        }
    }

    fn turn_of(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Phase::Player1Turn,
            PlayerId::Two => Phase::Player2Turn,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// What happened during one call to [`GameState::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Player who fired.
    pub player: PlayerId,
    pub outcome: Outcome,
    /// Phase after the turn; `GameOver` when this turn ended the game.
    pub phase: Phase,
}

/// All four boards of a game plus the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player1: PlayerBoards,
    player2: PlayerBoards,
    phase: Phase,
    turns: usize,
}

impl GameState {
    /// Game with empty boards and Player 1 to move. Ships must be placed
    /// before play makes sense; see [`GameState::with_random_fleets`].
    pub fn new() -> Self {
        Self::from_ship_grids(Board::new(), Board::new())
    }

    /// Game whose ship grids are laid out randomly, Player 1's fleet first.
    pub fn with_random_fleets<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut state = Self::new();
        place_fleet(&mut state.player1.ship_grid, rng)?;
        place_fleet(&mut state.player2.ship_grid, rng)?;
        Ok(state)
    }

    /// Game over prepared ship grids, with clean tracking grids.
    pub fn from_ship_grids(player1_ships: Board, player2_ships: Board) -> Self {
        Self {
            player1: PlayerBoards {
                ship_grid: player1_ships,
                tracking_grid: Board::new(),
            },
            player2: PlayerBoards {
                ship_grid: player2_ships,
                tracking_grid: Board::new(),
            },
            phase: Phase::Player1Turn,
            turns: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player expected to fire next, `None` once the game is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.phase.active_player()
    }

    /// Number of turns taken so far, invalid ones included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Boards belonging to `player`.
    pub fn boards(&self, player: PlayerId) -> &PlayerBoards {
        match player {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    /// Let the active player fire at the opponent with the raw token `input`.
    ///
    /// The turn passes to the other player whatever the outcome, an invalid
    /// token included. Once a winner is found the phase becomes `GameOver` and
    /// further calls fail with [`BoardError::GameOver`].
    pub fn take_turn(&mut self, input: &str) -> Result<TurnReport, BoardError> {
        let player = self.phase.active_player().ok_or(BoardError::GameOver)?;
        let (attacker, defender) = match player {
            PlayerId::One => (&mut self.player1, &self.player2),
            PlayerId::Two => (&mut self.player2, &self.player1),
        };
        let outcome = fire(input, &defender.ship_grid, &mut attacker.tracking_grid);
        self.turns += 1;
        debug!(
            "turn {}: player {} fired {:?} -> {:?}",
            self.turns,
            player.number(),
            input,
            outcome
        );

        self.phase = match self.winner() {
            Some(winner) => {
                info!("player {} is winner after {} turns", winner.number(), self.turns);
                Phase::GameOver { winner }
            }
            None => Phase::turn_of(player.opponent()),
        };
        Ok(TurnReport {
            player,
            outcome,
            phase: self.phase,
        })
    }

    /// Evaluate the win condition on both tracking grids without changing
    /// any state.
    ///
    /// Player 1's tracking grid is checked first, and a sunk reading there
    /// credits Player 2; a sunk reading on Player 2's tracking grid credits
    /// Player 1. Note the player whose tracking grid filled up is the one who
    /// did the sinking, so the credited player is the one whose fleet survived.
    pub fn winner(&self) -> Option<PlayerId> {
        if is_fleet_sunk(&self.player1.tracking_grid) {
            Some(PlayerId::Two)
        } else if is_fleet_sunk(&self.player2.tracking_grid) {
            Some(PlayerId::One)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::GameOver { winner } => GameStatus::Won(winner),
            _ => GameStatus::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
