use super::*;
use crate::gameplay::Game;
use crate::gameplay::Snapshot;
use std::time::Duration;
use tokio::sync::mpsc::*;
use tokio::task::JoinHandle;

/// central coordinator for a live table. single consumer of the event
/// queue and sole mutator of Game state: samples, clock ticks, and
/// round requests are applied strictly in arrival order, which is the
/// invariant that keeps the capture lock race-free without any atomics.
///
/// the countdown clock is a task of its own, spawned on each round
/// request. a new request aborts the previous round's clock so a stale
/// Second can never reach a fresh round; the Game ignores strays
/// regardless.
pub struct Room {
    game: Game,
    channel: Channel<Event>,
    timer: Option<JoinHandle<()>>,
    observers: Vec<UnboundedSender<Snapshot>>,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            game: Game::new(),
            channel: Channel::default(),
            timer: None,
            observers: Vec::new(),
        }
    }
}

impl Room {
    /// sender for the feed, the countdown clock, and the host's round
    /// requests. this is the only way events enter the room.
    pub fn trigger(&self) -> UnboundedSender<Event> {
        self.channel.tx().clone()
    }

    /// subscribe to read-only snapshots, one per applied event
    pub fn watch(&mut self) -> UnboundedReceiver<Snapshot> {
        let (tx, rx) = unbounded_channel();
        self.observers.push(tx);
        rx
    }

    pub async fn run(mut self) {
        while let Some(event) = self.channel.rx().recv().await {
            self.apply(event);
            self.broadcast();
        }
    }

    fn apply(&mut self, event: Event) {
        log::debug!("{:<16}{}", "apply", event);
        match event {
            Event::Start => {
                self.game.start();
                self.rewind();
            }
            Event::Second => self.game.countdown(),
            Event::Sample(hand) => self.game.observe(hand.as_ref()),
        }
    }

    /// (re)start the countdown clock, aborting the previous round's task
    fn rewind(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let sender = self.channel.tx().clone();
        self.timer = Some(tokio::spawn(async move {
            let mut seconds = tokio::time::interval(Duration::from_secs(1));
            seconds.tick().await;
            for _ in 0..crate::COUNTDOWN {
                seconds.tick().await;
                if sender.send(Event::Second).is_err() {
                    break;
                }
            }
        }));
    }

    fn broadcast(&mut self) {
        let snapshot = self.game.snapshot();
        self.observers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
