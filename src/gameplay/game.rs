use super::*;
use crate::hands::Gesture;
use crate::hands::Landmarks;

/// the round controller. sole owner of Round and Score, mutated only
/// from the room's sequential event loop, which is what lets the
/// capture lock stay a plain bool: two samples queued back to back
/// cannot both commit because the first sets the lock before the
/// second is applied.
///
/// two independent clocks drive it. the one-second clock advances the
/// countdown; the per-frame landmark clock is only consulted while the
/// round is armed. neither clock can fail the controller: every anomaly
/// degrades to staying in phase with a transient status.
#[derive(Debug, Default)]
pub struct Game {
    phase: Phase,
    round: Round,
    score: Score,
    status: Option<Status>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// the round request signal. always honored: a fresh countdown
    /// replaces whatever round came before, clearing round state and
    /// the capture lock while the score carries over.
    pub fn start(&mut self) {
        self.phase = Phase::Countdown(crate::COUNTDOWN);
        self.round = Round::default();
        self.status = None;
        log::info!("{:<16}{}", "round start", self.score);
    }

    /// one-second clock tick. ignored outside Countdown, so a stale
    /// timer from an earlier round can never advance a new one.
    pub fn countdown(&mut self) {
        if let Phase::Countdown(remaining) = self.phase {
            match remaining.saturating_sub(1) {
                0 => {
                    self.phase = Phase::Armed;
                    log::info!("{:<16}", "armed");
                }
                n => {
                    self.phase = Phase::Countdown(n);
                    log::debug!("{:<16}{}", "countdown", n);
                }
            }
        }
    }

    /// per-frame landmark tick, None when no hand was detected. only an
    /// armed round evaluates samples; idle, counting, and resolved
    /// rounds ignore the stream entirely, so a clean throw during the
    /// countdown cannot commit early.
    pub fn observe(&mut self, sample: Option<&Landmarks>) {
        if self.phase != Phase::Armed {
            return;
        }
        match sample {
            None => self.status = Some(Status::NoHand),
            Some(hand) => match Gesture::from(hand) {
                Gesture::Unclassified => self.status = Some(Status::Unclear),
                throw => self.commit(throw),
            },
        }
    }

    fn commit(&mut self, throw: Gesture) {
        if !self.round.lock() {
            return;
        }
        let computer = Gesture::random();
        let outcome = Outcome::from((throw, computer));
        self.round.player = Some(throw);
        self.round.computer = Some(computer);
        self.round.outcome = Some(outcome);
        self.score.tally(outcome);
        self.status = None;
        self.phase = Phase::Resolved;
        log::info!("{:<16}{:<12}{:<12}{}", "resolved", throw, computer, self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock() -> Landmarks {
        Landmarks::from([false, false, false, false, false])
    }
    fn scissors() -> Landmarks {
        Landmarks::from([false, true, true, false, false])
    }
    fn unclear() -> Landmarks {
        Landmarks::from([false, true, false, false, false])
    }

    /// request a round and run the clock down to the armed window
    fn armed() -> Game {
        let mut game = Game::new();
        game.start();
        game.countdown();
        game.countdown();
        game.countdown();
        game
    }

    #[test]
    fn starts_idle() {
        let game = Game::new();
        assert!(game.phase() == Phase::Idle);
        assert!(game.round().player.is_none());
        assert!(game.score() == Score::default());
    }

    #[test]
    fn countdown_runs_three_two_one_zero() {
        let mut game = Game::new();
        game.start();
        assert!(game.phase().remaining() == Some(3));
        game.countdown();
        assert!(game.phase().remaining() == Some(2));
        game.countdown();
        assert!(game.phase().remaining() == Some(1));
        game.countdown();
        assert!(game.phase().remaining() == Some(0));
        assert!(game.phase() == Phase::Armed);
    }

    #[test]
    fn stale_ticks_are_ignored_when_armed() {
        let mut game = armed();
        game.countdown();
        assert!(game.phase() == Phase::Armed);
    }

    #[test]
    fn stale_ticks_are_ignored_when_idle() {
        let mut game = Game::new();
        game.countdown();
        assert!(game.phase() == Phase::Idle);
    }

    #[test]
    fn no_commit_during_countdown() {
        let mut game = Game::new();
        game.start();
        game.observe(Some(&rock()));
        assert!(game.phase() == Phase::Countdown(3));
        assert!(!game.round().locked());
        assert!(game.round().player.is_none());
    }

    #[test]
    fn no_hand_keeps_the_round_armed() {
        let mut game = armed();
        for _ in 0..10 {
            game.observe(None);
            assert!(game.phase() == Phase::Armed);
            assert!(game.status() == Some(Status::NoHand));
        }
        assert!(!game.round().locked());
        assert!(game.score() == Score::default());
    }

    #[test]
    fn unclear_pose_keeps_the_round_armed() {
        let mut game = armed();
        for _ in 0..10 {
            game.observe(Some(&unclear()));
            assert!(game.phase() == Phase::Armed);
            assert!(game.status() == Some(Status::Unclear));
        }
        assert!(!game.round().locked());
    }

    #[test]
    fn unclear_then_scissors_commits_scissors() {
        let mut game = armed();
        game.observe(Some(&unclear()));
        assert!(game.phase() == Phase::Armed);
        game.observe(Some(&scissors()));
        assert!(game.phase() == Phase::Resolved);
        assert!(game.round().player == Some(Gesture::Scissors));
    }

    #[test]
    fn rock_resolves_consistently() {
        let mut game = armed();
        game.observe(Some(&rock()));
        assert!(game.phase() == Phase::Resolved);
        assert!(game.status().is_none());
        let round = game.round();
        let player = round.player.unwrap();
        let computer = round.computer.unwrap();
        assert!(player == Gesture::Rock);
        assert!(computer.is_throw());
        assert!(round.outcome == Some(Outcome::from((player, computer))));
    }

    #[test]
    fn commits_at_most_once() {
        let mut game = armed();
        game.observe(Some(&rock()));
        let first = *game.round();
        let score = game.score();
        game.observe(Some(&scissors()));
        assert!(game.round().player == first.player);
        assert!(game.round().computer == first.computer);
        assert!(game.round().outcome == first.outcome);
        assert!(game.score() == score);
    }

    #[test]
    fn score_tracks_outcomes() {
        let mut game = armed();
        game.observe(Some(&rock()));
        let score = game.score();
        let expected = match game.round().outcome.unwrap() {
            Outcome::PlayerWin => (1, 0),
            Outcome::ComputerWin => (0, 1),
            Outcome::Draw => (0, 0),
        };
        assert!((score.player, score.computer) == expected);
    }

    #[test]
    fn restart_clears_the_round_and_keeps_the_score() {
        let mut game = armed();
        game.observe(Some(&rock()));
        let score = game.score();
        game.start();
        assert!(game.phase() == Phase::Countdown(3));
        assert!(game.round().player.is_none());
        assert!(game.round().outcome.is_none());
        assert!(!game.round().locked());
        assert!(game.score() == score);
    }

    #[test]
    fn resolved_round_stays_on_display() {
        let mut game = armed();
        game.observe(Some(&rock()));
        game.observe(None);
        game.observe(Some(&scissors()));
        assert!(game.phase() == Phase::Resolved);
        assert!(game.round().player == Some(Gesture::Rock));
    }
}
