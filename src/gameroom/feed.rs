use super::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// the continuous landmark stream, run as its own task. owns the
/// camera, detector, and render sink; pushes exactly one Sample event
/// per tick whether or not a hand was found. the feed is never
/// cancelled mid-round: the room decides what samples mean, the feed
/// just keeps them coming until the room hangs up.
pub struct Feed<C, D, S> {
    camera: C,
    detector: D,
    sink: S,
    period: Duration,
    sender: UnboundedSender<Event>,
}

impl<C, D, S> Feed<C, D, S>
where
    C: Camera + 'static,
    D: Detector + 'static,
    S: Sink + 'static,
{
    pub fn spawn(
        camera: C,
        detector: D,
        sink: S,
        period: Duration,
        sender: UnboundedSender<Event>,
    ) -> JoinHandle<()> {
        let feed = Self {
            camera,
            detector,
            sink,
            period,
            sender,
        };
        tokio::spawn(feed.run())
    }

    async fn run(mut self) {
        log::info!("{:<16}{:?} per frame", "feed running", self.period);
        let mut ticks = tokio::time::interval(self.period);
        loop {
            ticks.tick().await;
            let frame = self.camera.frame();
            let hand = self.detector.detect(&frame).await.into_iter().next();
            if let Some(ref hand) = hand {
                self.sink.draw(hand);
            }
            if self.sender.send(Event::Sample(hand)).is_err() {
                break;
            }
        }
        log::info!("{:<16}", "feed stopped");
    }
}
