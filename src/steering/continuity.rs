use crate::angle::{self, FULL_TURN};
use crate::Result;
use log::{debug, trace};

/// Rotation direction, where positive is clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Positive,
    Negative,
}

impl Direction {
    /// The direction of a non-zero path, or `None` for a zero path.
    pub fn of(path: f32) -> Option<Self> {
        if path > 0. {
            Some(Direction::Positive)
        } else if path < 0. {
            Some(Direction::Negative)
        } else {
            None
        }
    }

    /// The sign of paths in this direction, `1` or `-1`.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.,
            Direction::Negative => -1.,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

/// Keeps rotation deltas continuous while the current angle is off its legal winding.
///
/// Each module owns one guard, evaluated once per control cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContinuityGuard {
    last_legal_direction: Direction,
}

impl ContinuityGuard {
    pub fn new(last_legal_direction: Direction) -> Self {
        Self {
            last_legal_direction,
        }
    }

    /// The direction of the last path taken from a legal angle.
    pub fn last_legal_direction(&self) -> Direction {
        self.last_legal_direction
    }

    /// Calculate the rotation delta (in degrees) from `current` to `target`.
    ///
    /// While `current` is legal this is the shortest path and its direction is remembered.
    /// Otherwise a path reversing the remembered direction is taken the long way around,
    /// which reaches the same orientation with a magnitude of at least 180.
    pub fn path(&mut self, current: f32, target: f32) -> Result<f32> {
        let mut path = angle::legal_path(current, target)?;
        let direction = Direction::of(path);

        if current == angle::legalize(current)? {
            if let Some(direction) = direction {
                self.last_legal_direction = direction;
            }
        } else if let Some(direction) =
            direction.filter(|&direction| direction == self.last_legal_direction.reversed())
        {
            let corrected = path - FULL_TURN * direction.sign();
            debug!(
                "continuity {:?} from {}: {} -> {}",
                self.last_legal_direction, current, path, corrected
            );
            path = corrected;
        }

        trace!("path from {} to {} is {}", current, target, path);
        Ok(path)
    }
}
