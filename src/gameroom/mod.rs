pub mod channel;
pub use channel::*;

pub mod detector;
pub use detector::*;

pub mod event;
pub use event::*;

pub mod feed;
pub use feed::*;

pub mod room;
pub use room::*;

pub mod scripted;
pub use scripted::*;

/// default per-frame cadence of the landmark feed, in milliseconds
pub const FRAME_MILLIS: u64 = 33;
