mod finger;
mod gesture;
mod landmark;
mod landmarks;

pub use finger::*;
pub use gesture::*;
pub use landmark::*;
pub use landmarks::*;

/// points per detected hand, fixed by the landmark model
pub const N: usize = 21;
