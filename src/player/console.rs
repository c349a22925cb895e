use std::io::{self, BufRead, Write};

use log::warn;

use crate::{common::Outcome, game::PlayerId, grid::Board};

use super::TargetSource;

/// Interactive source: shows the active player's tracking grid, prompts and
/// reads one line per turn.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
    reveal: Option<[Board; 2]>,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reveal: None,
        }
    }

    /// Also print each player's own ship grid before their prompt.
    pub fn revealing(mut self, player1_ships: Board, player2_ships: Board) -> Self {
        self.reveal = Some([player1_ships, player2_ships]);
        self
    }

    /// Release the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, player: PlayerId, tracking_grid: &Board) -> io::Result<()> {
        writeln!(self.output, "Player {}'s turn:", player.number())?;
        write!(self.output, "{}", tracking_grid)?;
        if let Some(ships) = &self.reveal {
            let own = match player {
                PlayerId::One => &ships[0],
                PlayerId::Two => &ships[1],
            };
            writeln!(self.output, "Your ships:")?;
            write!(self.output, "{}", own)?;
        }
        writeln!(self.output, "Enter target (for example A5): ")?;
        self.output.flush()
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            warn!("console write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> TargetSource for ConsoleSource<R, W> {
    fn next_target(&mut self, player: PlayerId, tracking_grid: &Board) -> Option<String> {
        if let Err(e) = self.prompt(player, tracking_grid) {
            warn!("console write failed: {}", e);
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let token = line.strip_suffix('\n').unwrap_or(&line);
                let token = token.strip_suffix('\r').unwrap_or(token);
                Some(token.to_string())
            }
            Err(e) => {
                warn!("console read failed: {}", e);
                None
            }
        }
    }

    fn handle_outcome(&mut self, _player: PlayerId, outcome: Outcome) {
        self.say(outcome.announcement());
    }

    fn handle_game_over(&mut self, winner: PlayerId) {
        self.say(&format!("Player {} is winner!", winner.number()));
        self.say("Game Over!");
    }
}
