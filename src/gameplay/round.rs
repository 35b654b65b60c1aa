use super::outcome::Outcome;
use crate::hands::Gesture;

/// one play-resolve cycle. the gesture and outcome fields fill in
/// exactly once, gated by the capture lock: the first classifiable
/// sample after arming commits, and every later sample in the same
/// round is ignored even though ticks keep arriving.
#[derive(Debug, Default, Clone, Copy)]
pub struct Round {
    pub player: Option<Gesture>,
    pub computer: Option<Gesture>,
    pub outcome: Option<Outcome>,
    locked: bool,
}

impl Round {
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// one-shot acquire. returns false if this round already committed.
    pub fn lock(&mut self) -> bool {
        match self.locked {
            true => false,
            false => {
                self.locked = true;
                true
            }
        }
    }
}
