//! Demo table binary.
//!
//! Plays scripted rounds against the house without a webcam: a
//! simulated hand stands in for the landmark model, everything
//! downstream of it is the real game.

use clap::Parser;
use roshambo::gameplay::Phase;
use roshambo::gameplay::Snapshot;
use roshambo::gameroom::*;
use std::time::Duration;

#[derive(Parser)]
#[command(about = "Rock-paper-scissors against the house, played by (scripted) hand.")]
struct Args {
    /// rounds to play before exiting
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// frame period of the landmark feed, in milliseconds
    #[arg(long, default_value_t = FRAME_MILLIS)]
    period: u64,
    /// seed for the scripted hand
    #[arg(long)]
    seed: Option<u64>,
    /// emit snapshots as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roshambo::log();
    let args = Args::parse();
    let mut room = Room::default();
    let trigger = room.trigger();
    let mut snapshots = room.watch();
    Feed::spawn(
        BlankCamera,
        ScriptedHand::new(args.seed),
        TraceSink,
        Duration::from_millis(args.period),
        room.trigger(),
    );
    tokio::spawn(room.run());
    let mut last: Option<Snapshot> = None;
    for _ in 0..args.rounds {
        trigger.send(Event::Start)?;
        loop {
            let snapshot = snapshots
                .recv()
                .await
                .ok_or_else(|| anyhow::anyhow!("room hung up"))?;
            if last.as_ref() != Some(&snapshot) {
                render(&snapshot, args.json)?;
                last = Some(snapshot.clone());
            }
            if snapshot.phase == Phase::Resolved {
                break;
            }
        }
    }
    Ok(())
}

fn render(snapshot: &Snapshot, json: bool) -> anyhow::Result<()> {
    match json {
        true => println!("{}", serde_json::to_string(snapshot)?),
        false => println!("{}", snapshot),
    }
    Ok(())
}
