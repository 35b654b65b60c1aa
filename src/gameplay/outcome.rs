use crate::hands::Gesture;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// result of one resolved round, from the player's side of the table
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

/// standard dominance relation over (player, computer) throws. only
/// concrete throws reach resolution; the controller never commits an
/// Unclassified pose.
impl From<(Gesture, Gesture)> for Outcome {
    fn from((player, computer): (Gesture, Gesture)) -> Self {
        assert!(player.is_throw() && computer.is_throw());
        match (player.beats(&computer), computer.beats(&player)) {
            (true, false) => Self::PlayerWin,
            (false, true) => Self::ComputerWin,
            _ => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerWin => write!(f, "{}", "You Win!".green()),
            Self::ComputerWin => write!(f, "{}", "Computer Wins!".red()),
            Self::Draw => write!(f, "Draw!"),
        }
    }
}
