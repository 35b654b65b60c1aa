pub mod game;
pub use game::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod round;
pub use round::*;

pub mod score;
pub use score::*;

pub mod snapshot;
pub use snapshot::*;

pub mod status;
pub use status::*;
