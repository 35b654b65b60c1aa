use super::*;
use crate::hands::Finger;
use crate::hands::Landmarks;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// stand-in camera for headless runs: emits blank frames at the feed's
/// cadence. frame contents never matter to the core.
#[derive(Debug, Default)]
pub struct BlankCamera;

impl Camera for BlankCamera {
    fn frame(&mut self) -> Frame {
        Frame {
            width: 640,
            height: 480,
            pixels: Vec::new(),
        }
    }
}

/// simulation-mode detector: synthesizes poses instead of running a
/// model. weighted draw per tick, mostly clean throws with occasional
/// empty and ambiguous frames to exercise the armed loop the way a
/// living hand would.
pub struct ScriptedHand {
    rng: SmallRng,
}

impl ScriptedHand {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed
                .map(SmallRng::seed_from_u64)
                .unwrap_or_else(SmallRng::from_os_rng),
        }
    }

    fn pose(&mut self) -> Option<Landmarks> {
        match self.rng.random_range(0..10u8) {
            0 | 1 => None,
            2 | 3 => Some(Landmarks::from([false, true, false, false, false])),
            n => Some(Landmarks::from(match n % 3 {
                0 => [true, false, false, false, false],
                1 => [true, true, true, true, true],
                _ => [false, true, true, false, false],
            })),
        }
    }
}

#[async_trait::async_trait]
impl Detector for ScriptedHand {
    async fn detect(&mut self, _: &Frame) -> Vec<Landmarks> {
        self.pose().into_iter().collect()
    }
}

/// render sink for headless runs: traces the hand position instead of
/// drawing keypoints.
#[derive(Debug, Default)]
pub struct TraceSink;

impl Sink for TraceSink {
    fn draw(&mut self, hand: &Landmarks) {
        log::trace!("{:<16}{} index tip {}", "draw", hand, hand.tip(Finger::Index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::Gesture;

    #[tokio::test]
    async fn collapses_to_first_hand() {
        let mut detector = ScriptedHand::new(Some(42));
        let frame = BlankCamera.frame();
        for _ in 0..100 {
            let hands = detector.detect(&frame).await;
            assert!(hands.len() <= 1);
        }
    }

    #[tokio::test]
    async fn seeded_scripts_replay() {
        let frame = Frame::default();
        let mut one = ScriptedHand::new(Some(7));
        let mut two = ScriptedHand::new(Some(7));
        for _ in 0..50 {
            assert!(one.detect(&frame).await == two.detect(&frame).await);
        }
    }

    #[tokio::test]
    async fn eventually_throws() {
        let mut detector = ScriptedHand::new(Some(1));
        let frame = Frame::default();
        let mut threw = false;
        for _ in 0..100 {
            if let Some(hand) = detector.detect(&frame).await.first() {
                threw |= Gesture::from(hand).is_throw();
            }
        }
        assert!(threw);
    }
}
