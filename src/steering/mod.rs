pub mod continuity;
pub use continuity::{ContinuityGuard, Direction};

pub mod decapitation;
pub use decapitation::{Decapitation, Resolution, Spin, MAX_ROTATION};
