use serde::{Deserialize, Serialize};

/// round lifecycle. Countdown carries the seconds left on the clock;
/// Armed is the window where landmark samples are evaluated; Resolved
/// holds the result on display until the next round request.
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Countdown(u8),
    Armed,
    Resolved,
}

impl Phase {
    /// seconds left on the countdown clock. an armed round reads as 0,
    /// matching what a scoreboard would show the instant the clock runs
    /// out.
    pub fn remaining(&self) -> Option<u8> {
        match self {
            Self::Countdown(n) => Some(*n),
            Self::Armed => Some(0),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Countdown(n) => write!(f, "countdown {}", n),
            Self::Armed => write!(f, "armed"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}
