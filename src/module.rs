use crate::hal::{Actuator, RotationMotor, TractionMotor};
use crate::steering::{Decapitation, Resolution, Spin};
use crate::{angle, ModuleConfig, Result, RotationControl};
use log::trace;
use nalgebra::Vector2;
use num_traits::Float;

/// A single swerve module: a rotation motor steering a traction motor.
///
/// Angles are in degrees with positive clockwise, distances are in inches.
pub struct SwerveModule<R, T> {
    rotation: RotationControl<R>,
    traction: T,
    config: ModuleConfig,
    decapitation: Decapitation,
    traction_previous_path_length: f32,
    traction_delta_path_length: f32,
}

impl<R, T> SwerveModule<R, T>
where
    R: RotationMotor,
    T: Actuator,
{
    pub fn new(rotation: R, traction: T, config: ModuleConfig) -> Result<Self> {
        config.validate()?;

        let mut rotation = RotationControl::new(rotation);
        rotation.set_tare_angle(config.tare_angle)?;

        Ok(Self {
            rotation,
            traction,
            config,
            decapitation: Decapitation::default(),
            traction_previous_path_length: 0.,
            traction_delta_path_length: 0.,
        })
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Set the tare angle, or add to it if `relative` is `true`.
    pub fn set_tare_angle(&mut self, tare_angle: f32, relative: bool) -> Result<()> {
        let tare_angle = if relative {
            tare_angle + self.rotation.tare_angle()
        } else {
            tare_angle
        };
        self.rotation.set_tare_angle(tare_angle)
    }

    pub fn tare_angle(&self) -> f32 {
        self.rotation.tare_angle()
    }

    /// Resolve the target (relative to the robot) the wheel should rotate to
    /// and update the spin direction used by [`SwerveModule::set`].
    pub fn resolve_target(&mut self, wheel_robot_angle: f32) -> Result<Resolution> {
        let current = self.rotation.current_angle();
        self.decapitation.resolve(current, wheel_robot_angle)
    }

    /// Point the wheel along `wheel_robot_angle`, rotating at most 90 degrees.
    pub fn swivel_to(&mut self, wheel_robot_angle: f32) -> Result<()> {
        let resolution = self.resolve_target(wheel_robot_angle)?;
        self.rotation.set_angle(resolution.target)
    }

    /// Point the wheel along `wheel_field_angle` given the chassis heading on the field.
    pub fn swivel_with(&mut self, wheel_field_angle: f32, chassis_field_angle: f32) -> Result<()> {
        self.swivel_to(angle::convert_to_robot(
            wheel_field_angle,
            chassis_field_angle,
        )?)
    }

    /// Continuous rotation delta from the current angle to `target`.
    pub fn path_to(&mut self, target: f32) -> Result<f32> {
        self.rotation.path_to(target)
    }

    /// Drive the wheel at `speed` in [-1, 1], in the correct direction regardless of spin.
    pub fn set(&mut self, speed: f32) {
        let output = speed.clamp(-1., 1.) * self.decapitation.spin().sign();
        trace!("traction output {}", output);
        self.traction.output(output);
    }

    pub fn spin(&self) -> Spin {
        self.decapitation.spin()
    }

    /// The drive speed sign, `1` or `-1`.
    pub fn decapitated(&self) -> f32 {
        self.decapitation.spin().sign()
    }

    /// Returns `true` if the rotator is within `threshold` degrees of its target.
    pub fn is_there(&mut self, threshold: f32) -> bool {
        self.rotation.pid_error().abs() <= threshold
    }

    /// The current tared wheel angle relative to the robot.
    pub fn angle(&mut self) -> f32 {
        self.rotation.current_angle()
    }

    pub fn rotation(&self) -> &RotationControl<R> {
        &self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut RotationControl<R> {
        &mut self.rotation
    }

    pub fn traction(&self) -> &T {
        &self.traction
    }

    pub fn traction_mut(&mut self) -> &mut T {
        &mut self.traction
    }
}

impl<R, T> SwerveModule<R, T>
where
    R: RotationMotor,
    T: TractionMotor,
{
    /// Commit buffered updates on both motors.
    pub fn complete_loop_update(&mut self) {
        self.rotation.complete_loop_update();
        self.traction.complete_loop_update();
    }

    /// Wheel surface speed in inches/second.
    pub fn traction_speed(&mut self) -> f32 {
        self.traction.rps() / self.config.traction_gear_ratio * self.config.wheel_circumference
    }

    /// Distance (in inches) travelled by the wheel since the last encoder reset.
    pub fn traction_path_length(&mut self) -> f32 {
        self.traction.revolutions() / self.config.traction_gear_ratio
            * self.config.wheel_circumference
    }

    /// Sample the traction encoder, call once per control cycle.
    pub fn check_traction_encoder(&mut self) {
        let current_path_length = self.traction_path_length();
        self.traction_delta_path_length = current_path_length - self.traction_previous_path_length;
        self.traction_previous_path_length = current_path_length;
    }

    /// Distance travelled between the last two encoder samples.
    pub fn delta_distance(&self) -> f32 {
        self.traction_delta_path_length
    }

    /// Field displacement between the last two encoder samples, with y along a zero heading.
    pub fn delta_displacement(&mut self, chassis_field_angle: f32) -> Result<Vector2<f32>> {
        let field_angle =
            angle::convert_to_field(self.rotation.current_angle(), chassis_field_angle)?
                .to_radians();
        let (sin, cos) = field_angle.sin_cos();

        Ok(Vector2::new(sin, cos) * self.traction_delta_path_length)
    }

    pub fn delta_x_distance(&mut self, chassis_field_angle: f32) -> Result<f32> {
        Ok(self.delta_displacement(chassis_field_angle)?.x)
    }

    pub fn delta_y_distance(&mut self, chassis_field_angle: f32) -> Result<f32> {
        Ok(self.delta_displacement(chassis_field_angle)?.y)
    }

    /// Zero the traction encoder along with the sampled path length.
    pub fn reset_traction_encoder(&mut self) {
        self.traction.reset_encoder();
        self.traction_previous_path_length = 0.;
        self.traction_delta_path_length = 0.;
    }

    pub fn integrated_sensor_counts(&mut self) -> f32 {
        self.traction.position_from_integrated_sensor()
    }

    /// Traction motor revolutions per minute.
    pub fn rpm(&mut self) -> f32 {
        self.traction.rps() * 60.
    }
}
