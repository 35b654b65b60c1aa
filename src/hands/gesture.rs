use super::finger::Finger;
use super::landmarks::Landmarks;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// a classified hand pose. Unclassified is a normal outcome, not an
/// error: any pose outside the three canonical throws lands there.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unclassified,
}

impl Gesture {
    /// uniform random concrete throw for the house
    pub fn random() -> Self {
        Self::from(rand::rng().random_range(0..3u8))
    }

    /// the standard dominance relation. Unclassified beats nothing.
    pub fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }

    pub fn is_throw(&self) -> bool {
        *self != Self::Unclassified
    }
}

/// u8 injection for random draws
impl From<u8> for Gesture {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => panic!("invalid gesture u8: {}", n),
        }
    }
}

/// the classifier. recognizes the three canonical poses and rejects
/// every other extension pattern as Unclassified. rules apply in
/// priority order, first match wins; the thumb only matters for Paper.
impl From<&Landmarks> for Gesture {
    fn from(hand: &Landmarks) -> Self {
        let thumb = hand.extended(Finger::Thumb);
        let fingers = Finger::fingers().map(|finger| hand.extended(finger));
        let count = fingers.iter().filter(|raised| **raised).count();
        match (fingers, count, thumb) {
            (_, 0, _) => Self::Rock,
            (_, 4, true) => Self::Paper,
            ([true, true, false, false], _, _) => Self::Scissors,
            _ => Self::Unclassified,
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "rock",
                Self::Paper => "paper",
                Self::Scissors => "scissors",
                Self::Unclassified => "unclassified",
            }
        )
    }
}
