use crate::angle::{self, HALF_TURN};
use crate::Result;
use log::{debug, trace};
use num_traits::Float;

/// The largest rotation (in degrees) a module is ever commanded to make.
pub const MAX_ROTATION: f32 = 90.;

/// Wheel spin direction relative to the commanded drive speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spin {
    /// Drive speed is passed through as-is.
    #[default]
    Forward,

    /// The steering target was folded by 180 degrees so drive speed is inverted.
    Inverted,
}

impl Spin {
    /// The factor to scale drive speed by, `1` or `-1`.
    pub fn sign(self) -> f32 {
        match self {
            Spin::Forward => 1.,
            Spin::Inverted => -1.,
        }
    }
}

/// A steering target resolved by [`Decapitation::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// The angle (in degrees) to send to the rotation motor,
    /// on the same winding as the current angle.
    pub target: f32,

    /// The spin direction that makes `target` equivalent to the desired orientation.
    pub spin: Spin,
}

/// Per-module decapitation state.
///
/// A wheel facing `a` and driving forwards moves the same way as a wheel facing `a + 180`
/// driving backwards, so any orientation is reachable within [`MAX_ROTATION`] degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decapitation {
    spin: Spin,
}

impl Decapitation {
    /// The spin direction of the last resolution.
    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Resolve the closest target to `current` (in degrees, any winding)
    /// that points the wheel along `desired`.
    ///
    /// A required rotation of exactly 90 degrees is not folded.
    /// On error the state is left unchanged.
    pub fn resolve(&mut self, current: f32, desired: f32) -> Result<Resolution> {
        let end = angle::legalize(desired)?;

        // Signed difference between `end` and `current` shifted onto the same winding
        let mut delta = angle::legal_path(current, end)?;

        let spin = if delta.abs() > MAX_ROTATION {
            delta -= HALF_TURN.copysign(delta);
            Spin::Inverted
        } else {
            Spin::Forward
        };

        if spin != self.spin {
            debug!("decapitation {:?} -> {:?} at {} toward {}", self.spin, spin, current, end);
        }
        self.spin = spin;

        let target = current + delta;
        trace!("resolved {} from {} to {} ({:?})", desired, current, target, spin);

        Ok(Resolution { target, spin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn resolve(current: f32, desired: f32) -> Resolution {
        Decapitation::default().resolve(current, desired).unwrap()
    }

    #[test]
    fn folds_large_rotations() {
        let res = resolve(0., 170.);
        assert_eq!(res.spin, Spin::Inverted);
        assert_eq!(res.target, -10.);
    }

    #[test]
    fn keeps_small_rotations() {
        let res = resolve(0., 45.);
        assert_eq!(res.spin, Spin::Forward);
        assert_eq!(res.target, 45.);
    }

    #[test]
    fn exactly_ninety_is_not_folded() {
        assert_eq!(resolve(0., 90.), Resolution { target: 90., spin: Spin::Forward });
        assert_eq!(resolve(0., -90.), Resolution { target: -90., spin: Spin::Forward });
    }

    #[test]
    fn half_turn_keeps_the_wheel_still() {
        let res = resolve(30., -150.);
        assert_eq!(res.spin, Spin::Inverted);
        assert_eq!(res.target, 30.);
    }

    #[test]
    fn target_stays_on_current_winding() {
        // 720 + 10 is facing 10, the desired -100 is 110 away so the wheel folds to 80
        let res = resolve(730., -100.);
        assert_eq!(res.spin, Spin::Inverted);
        assert_abs_diff_eq!(res.target, 800., epsilon = 1e-3);

        let res = resolve(-350., 20.);
        assert_eq!(res.spin, Spin::Forward);
        assert_abs_diff_eq!(res.target, -340., epsilon = 1e-3);
    }

    #[test]
    fn across_the_wrap_boundary() {
        let res = resolve(175., -175.);
        assert_eq!(res.spin, Spin::Forward);
        assert_eq!(res.target, 185.);
    }

    #[test]
    fn state_persists_until_next_resolution() {
        let mut decap = Decapitation::default();
        decap.resolve(0., 135.).unwrap();
        assert_eq!(decap.spin(), Spin::Inverted);
        assert_eq!(decap.spin().sign(), -1.);

        decap.resolve(-45., -30.).unwrap();
        assert_eq!(decap.spin(), Spin::Forward);
    }

    #[test]
    fn invalid_angles_leave_state_unchanged() {
        let mut decap = Decapitation::default();
        decap.resolve(0., 179.).unwrap();

        assert!(decap.resolve(0., f32::NAN).is_err());
        assert!(decap.resolve(f32::INFINITY, 10.).is_err());
        assert_eq!(decap.spin(), Spin::Inverted);
    }
}
