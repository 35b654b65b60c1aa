/// transient per-tick signals surfaced while a round is armed. these are
/// not failures: the round stays where it is and keeps accepting ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Status {
    NoHand,
    Unclear,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoHand => write!(f, "No hand detected."),
            Self::Unclear => write!(f, "Gesture unclear. Try again."),
        }
    }
}
