/// the five digits, in landmark-model order
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const fn all() -> [Self; 5] {
        [
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }

    /// the four digits counted in the extension tally
    pub const fn fingers() -> [Self; 4] {
        [Self::Index, Self::Middle, Self::Ring, Self::Pinky]
    }

    /// fingertip landmark index
    pub const fn tip(self) -> usize {
        match self {
            Self::Thumb => 4,
            Self::Index => 8,
            Self::Middle => 12,
            Self::Ring => 16,
            Self::Pinky => 20,
        }
    }

    /// the joint the tip is measured against: always the landmark just
    /// below the tip, i.e. the thumb IP and the DIP of the other digits
    pub const fn joint(self) -> usize {
        self.tip() - 1
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
