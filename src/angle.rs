use crate::{Error, Result};
use log::warn;
use num_traits::Euclid;

/// One full turn in degrees.
pub const FULL_TURN: f32 = 360.;

/// Half a turn in degrees, the upper bound of the legal range.
pub const HALF_TURN: f32 = 180.;

/// Returns `true` if `angle` is finite and already lies in `(-180, 180]`.
pub fn is_legal(angle: f32) -> bool {
    angle > -HALF_TURN && angle <= HALF_TURN
}

/// Reject NaN and infinite angles.
pub(crate) fn finite(angle: f32) -> Result<f32> {
    if angle.is_finite() {
        Ok(angle)
    } else {
        warn!("rejected non-finite angle {}", angle);
        Err(Error::InvalidAngle(angle))
    }
}

/// Wrap `angle` (in degrees) into the legal range `(-180, 180]`.
///
/// Legal angles are returned unchanged.
///
/// ```
/// use embedded_swerve::angle::legalize;
///
/// assert_eq!(legalize(370.).unwrap(), 10.);
/// assert_eq!(legalize(-180.).unwrap(), 180.);
/// ```
pub fn legalize(angle: f32) -> Result<f32> {
    let angle = finite(angle)?;
    if is_legal(angle) {
        return Ok(angle);
    }

    let wrapped = HALF_TURN - Euclid::rem_euclid(&(HALF_TURN - angle), &FULL_TURN);

    // `rem_euclid` can round up to a full turn for tiny negative remainders
    Ok(if wrapped <= -HALF_TURN {
        wrapped + FULL_TURN
    } else {
        wrapped
    })
}

/// Wrap the composition of two angles (e.g. wheel + chassis heading).
pub fn validate(angle: f32) -> Result<f32> {
    legalize(angle)
}

/// Calculate the shortest signed rotation from `current` to `target` in degrees.
///
/// Positive paths are clockwise. The result has a magnitude of at most 180,
/// where a half turn is always `+180`.
pub fn legal_path(current: f32, target: f32) -> Result<f32> {
    legalize(finite(target)? - finite(current)?)
}

/// Translate a robot-relative wheel angle into the field's orientation.
pub fn convert_to_field(wheel_robot_angle: f32, chassis_field_angle: f32) -> Result<f32> {
    validate(finite(wheel_robot_angle)? + finite(chassis_field_angle)?)
}

/// Translate a field-relative wheel angle into the robot's perspective.
pub fn convert_to_robot(wheel_field_angle: f32, chassis_field_angle: f32) -> Result<f32> {
    validate(finite(wheel_field_angle)? - finite(chassis_field_angle)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn legal_angles_are_unchanged() {
        for angle in [0., 1e-10, -1e-10, 45.5, -179.999, 180., 90.] {
            assert_eq!(legalize(angle).unwrap(), angle);
        }
    }

    #[test]
    fn wraps_into_range() {
        assert_eq!(legalize(-180.).unwrap(), 180.);
        assert_eq!(legalize(540.).unwrap(), 180.);
        assert_eq!(legalize(360.).unwrap(), 0.);
        assert_eq!(legalize(-190.).unwrap(), 170.);
        assert_eq!(legalize(190.).unwrap(), -170.);
        assert_abs_diff_eq!(legalize(3600. + 12.5).unwrap(), 12.5, epsilon = 1e-3);
        assert_abs_diff_eq!(legalize(-7200. - 30.).unwrap(), -30., epsilon = 1e-3);
    }

    #[test]
    fn huge_angles_stay_legal() {
        for angle in [1e9, -1e9, 123_456_789., f32::MAX, f32::MIN] {
            assert!(is_legal(legalize(angle).unwrap()));
        }
    }

    #[test]
    fn tiny_negative_remainder_stays_legal() {
        let angle = legalize(-180. - f32::EPSILON * 256.).unwrap();
        assert!(is_legal(angle));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(legalize(f32::INFINITY), Err(Error::InvalidAngle(f32::INFINITY)));
        assert!(matches!(legalize(f32::NAN), Err(Error::InvalidAngle(_))));
        assert!(legal_path(f32::NAN, 0.).is_err());
        assert!(legal_path(0., f32::NEG_INFINITY).is_err());
        assert!(convert_to_field(0., f32::NAN).is_err());
    }

    #[test]
    fn shortest_path() {
        assert_eq!(legal_path(0., 90.).unwrap(), 90.);
        assert_eq!(legal_path(90., 0.).unwrap(), -90.);
        assert_eq!(legal_path(170., -170.).unwrap(), 20.);
        assert_eq!(legal_path(-170., 170.).unwrap(), -20.);
        assert_eq!(legal_path(725., 0.).unwrap(), -5.);
    }

    #[test]
    fn half_turn_path_is_positive() {
        assert_eq!(legal_path(0., 180.).unwrap(), 180.);
        assert_eq!(legal_path(180., 0.).unwrap(), 180.);
        assert_eq!(legal_path(90., -90.).unwrap(), 180.);
    }

    #[test]
    fn field_robot_conversion() {
        assert_eq!(convert_to_field(30., 170.).unwrap(), -160.);
        assert_eq!(convert_to_robot(-160., 170.).unwrap(), 30.);
        assert_eq!(convert_to_robot(0., 90.).unwrap(), -90.);
    }
}
