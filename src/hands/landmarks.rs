use super::finger::Finger;
use super::landmark::Landmark;
use crate::Coordinate;

/// a full hand of keypoints in the detector's anatomical order: wrist
/// first, then four joints per digit ending at the tip. always exactly
/// N points; a frame without a hand yields no Landmarks at all, never
/// an empty or partial set.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks([Landmark; crate::hands::N]);

impl Landmarks {
    pub fn wrist(&self) -> Landmark {
        self.0[0]
    }

    pub fn tip(&self, finger: Finger) -> Landmark {
        self.0[finger.tip()]
    }

    pub fn joint(&self, finger: Finger) -> Landmark {
        self.0[finger.joint()]
    }

    /// 2D extension heuristic: the tip sits above its joint in image
    /// space. orientation-dependent; assumes a roughly upright,
    /// camera-facing hand.
    pub fn extended(&self, finger: Finger) -> bool {
        self.tip(finger).y < self.joint(finger).y
    }
}

/// untrusted boundary. detectors arrive asynchronously and occasionally
/// malformed; anything but exactly N points is rejected here so the host
/// can treat the sample as no hand at all.
impl TryFrom<Vec<Landmark>> for Landmarks {
    type Error = &'static str;
    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        points
            .try_into()
            .map(Self)
            .map_err(|_| "landmark set must contain exactly 21 points")
    }
}

/// synthetic pose from extension flags [thumb, index, middle, ring,
/// pinky]: tips sit above their joints when raised, below when curled.
/// simulation feeds and tests use this in place of a live detector.
impl From<[bool; 5]> for Landmarks {
    fn from(extension: [bool; 5]) -> Self {
        const PALM: (Coordinate, Coordinate) = (320., 240.);
        let mut points = [Landmark::from(PALM); crate::hands::N];
        points[0] = Landmark::from((320., 400.));
        for (finger, raised) in Finger::all().into_iter().zip(extension) {
            points[finger.tip()] = match raised {
                true => Landmark::from((PALM.0, PALM.1 - 80.)),
                false => Landmark::from((PALM.0, PALM.1 + 60.)),
            };
        }
        Self(points)
    }
}

impl std::fmt::Display for Landmarks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "hand @ {}", self.wrist())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_set() {
        let points = vec![Landmark::default(); 20];
        assert!(Landmarks::try_from(points).is_err());
    }

    #[test]
    fn rejects_long_set() {
        let points = vec![Landmark::default(); 22];
        assert!(Landmarks::try_from(points).is_err());
    }

    #[test]
    fn accepts_full_set() {
        let points = vec![Landmark::default(); crate::hands::N];
        assert!(Landmarks::try_from(points).is_ok());
    }

    #[test]
    fn extension_follows_pose() {
        let hand = Landmarks::from([true, false, true, false, true]);
        assert!(hand.extended(Finger::Thumb));
        assert!(!hand.extended(Finger::Index));
        assert!(hand.extended(Finger::Middle));
        assert!(!hand.extended(Finger::Ring));
        assert!(hand.extended(Finger::Pinky));
    }

    #[test]
    fn extended_means_tip_above_joint() {
        let hand = Landmarks::from([false, true, false, false, false]);
        assert!(hand.tip(Finger::Index).y < hand.joint(Finger::Index).y);
        assert!(hand.tip(Finger::Ring).y > hand.joint(Finger::Ring).y);
    }
}
