use crate::Coordinate;

/// one anatomical keypoint in image space. y grows downward, so a
/// smaller y means higher in the frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl From<(Coordinate, Coordinate)> for Landmark {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self { x, y }
    }
}

/// detectors emit [x, y, z]; depth is dropped by the 2D heuristic
impl From<[Coordinate; 3]> for Landmark {
    fn from(xyz: [Coordinate; 3]) -> Self {
        Self {
            x: xyz[0],
            y: xyz[1],
        }
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}
