use crate::angle;
use crate::hal::RotationMotor;
use crate::steering::{ContinuityGuard, Direction};
use crate::Result;
use log::debug;

/// Tared steering control on top of a [`RotationMotor`].
///
/// Angles are in degrees with positive clockwise. The tare angle is added to every
/// reading and removed from every command, so a zero sensor reading can be redefined
/// as any physical heading.
pub struct RotationControl<M> {
    motor: M,
    tare_angle: f32,
    guard: ContinuityGuard,
}

impl<M: RotationMotor> RotationControl<M> {
    pub fn new(motor: M) -> Self {
        Self {
            motor,
            tare_angle: 0.,
            guard: ContinuityGuard::default(),
        }
    }

    /// Command the motor to the tared `angle`.
    pub fn set_angle(&mut self, angle: f32) -> Result<()> {
        let angle = angle::finite(angle)?;
        self.motor.set_angle(angle - self.tare_angle);
        Ok(())
    }

    /// The current tared angle.
    pub fn current_angle(&mut self) -> f32 {
        self.motor.current_angle() + self.tare_angle
    }

    pub fn tare_angle(&self) -> f32 {
        self.tare_angle
    }

    pub fn set_tare_angle(&mut self, tare_angle: f32) -> Result<()> {
        let tare_angle = angle::finite(tare_angle)?;
        debug!("tare angle {} -> {}", self.tare_angle, tare_angle);
        self.tare_angle = tare_angle;
        Ok(())
    }

    /// Calculate a continuous rotation delta from the current angle to `target`.
    ///
    /// See [`ContinuityGuard::path`].
    pub fn path_to(&mut self, target: f32) -> Result<f32> {
        let current = angle::finite(self.current_angle())?;
        self.guard.path(current, target)
    }

    pub fn last_legal_direction(&self) -> Direction {
        self.guard.last_legal_direction()
    }

    pub fn encoder_voltage(&mut self) -> f32 {
        self.motor.encoder_voltage()
    }

    pub fn reset_encoder(&mut self) {
        self.motor.reset_encoder()
    }

    pub fn position_from_integrated_sensor(&mut self) -> f32 {
        self.motor.position_from_integrated_sensor()
    }

    pub fn pid_error(&mut self) -> f32 {
        self.motor.pid_error()
    }

    pub fn complete_loop_update(&mut self) {
        self.motor.complete_loop_update()
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }
}
