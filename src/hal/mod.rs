pub trait Actuator {
    /// Output a percentage in [-1, 1].
    fn output(&mut self, output: f32);
}

/// The steering motor of a swerve module with an absolute angle sensor.
///
/// Angles are in degrees on the motor's own (untared) winding.
pub trait RotationMotor {
    /// Command the closed-loop angle target.
    fn set_angle(&mut self, angle: f32);

    fn current_angle(&mut self) -> f32;

    /// Raw voltage of the absolute encoder.
    fn encoder_voltage(&mut self) -> f32;

    fn reset_encoder(&mut self);

    fn position_from_integrated_sensor(&mut self) -> f32;

    /// Error (in degrees) of the angle control loop.
    fn pid_error(&mut self) -> f32;

    /// Commit any buffered updates at the end of a control cycle.
    fn complete_loop_update(&mut self) {}
}

/// A drive motor with an encoder.
pub trait TractionMotor: Actuator {
    /// Motor revolutions per second.
    fn rps(&mut self) -> f32;

    /// Motor revolutions since the last encoder reset.
    fn revolutions(&mut self) -> f32;

    fn reset_encoder(&mut self);

    fn position_from_integrated_sensor(&mut self) -> f32;

    fn complete_loop_update(&mut self) {}
}
