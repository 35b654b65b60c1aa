use super::outcome::Outcome;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// cumulative tally across the process lifetime. counters only ever
/// grow: a decisive round bumps exactly one side, a draw bumps neither,
/// and nothing short of a restart resets them.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player += 1,
            Outcome::ComputerWin => self.computer += 1,
            Outcome::Draw => (),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Computer",
            self.player.to_string().green(),
            self.computer.to_string().red(),
        )
    }
}
