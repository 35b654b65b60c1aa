use crate::hands::Landmarks;

/// everything the room's single consumer can be asked to apply, in
/// arrival order: the host's round request, the one-second countdown
/// clock, and the continuous landmark stream. Sample(None) means the
/// detector saw no hand this tick, which is a normal frame and not an
/// error.
#[derive(Debug, Clone)]
pub enum Event {
    Start,
    Second,
    Sample(Option<Landmarks>),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Second => write!(f, "second"),
            Self::Sample(Some(hand)) => write!(f, "sample {}", hand),
            Self::Sample(None) => write!(f, "sample none"),
        }
    }
}
