use super::*;
use crate::hands::Gesture;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// read-only view of the table after one applied event. hosts render
/// these however they like; nothing in here can reach back into the
/// game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub countdown: Option<u8>,
    pub player: Option<Gesture>,
    pub computer: Option<Gesture>,
    pub outcome: Option<Outcome>,
    pub status: Option<String>,
    pub score: Score,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            countdown: game.phase().remaining(),
            player: game.round().player,
            computer: game.round().computer,
            outcome: game.round().outcome,
            status: game.status().map(|status| status.to_string()),
            score: game.score(),
        }
    }
}

impl Snapshot {
    fn gesture(gesture: Option<Gesture>) -> String {
        gesture.map(|g| g.to_string()).unwrap_or_else(|| "none".into())
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.phase {
            Phase::Idle => write!(f, "{}", self.score),
            Phase::Countdown(n) => write!(f, "{}...", n),
            Phase::Armed => match self.status {
                Some(ref status) => write!(f, "{}", status.yellow()),
                None => write!(f, "show your hand"),
            },
            Phase::Resolved => write!(
                f,
                "you {:<10} computer {:<10} {}  {}",
                Self::gesture(self.player),
                Self::gesture(self.computer),
                self.outcome.map(|o| o.to_string()).unwrap_or_default(),
                self.score,
            ),
        }
    }
}
