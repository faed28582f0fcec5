use core::f32::consts::PI;

use crate::{angle, Error, Result};

/// Physical configuration of a swerve module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModuleConfig {
    /// Traction motor turns per wheel turn.
    pub traction_gear_ratio: f32,

    /// Wheel circumference in inches.
    pub wheel_circumference: f32,

    /// Initial tare angle in degrees, positive is clockwise.
    pub tare_angle: f32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            traction_gear_ratio: 52. / 9.,
            wheel_circumference: 4. * PI,
            tare_angle: 0.,
        }
    }
}

impl ModuleConfig {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Check that the gear ratio and wheel circumference are positive and the tare is finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.traction_gear_ratio > 0. && self.traction_gear_ratio.is_finite()) {
            return Err(Error::InvalidConfig("traction gear ratio must be positive"));
        }
        if !(self.wheel_circumference > 0. && self.wheel_circumference.is_finite()) {
            return Err(Error::InvalidConfig("wheel circumference must be positive"));
        }
        angle::finite(self.tare_angle)?;

        Ok(())
    }
}

#[derive(Default)]
pub struct Builder {
    config: ModuleConfig,
}

impl Builder {
    pub fn traction_gear_ratio(mut self, ratio: f32) -> Self {
        self.config.traction_gear_ratio = ratio;
        self
    }

    /// Wheel circumference in inches.
    pub fn wheel_circumference(mut self, inches: f32) -> Self {
        self.config.wheel_circumference = inches;
        self
    }

    /// Wheel diameter in inches.
    pub fn wheel_diameter(self, inches: f32) -> Self {
        self.wheel_circumference(inches * PI)
    }

    pub fn tare_angle(mut self, degrees: f32) -> Self {
        self.config.tare_angle = degrees;
        self
    }

    pub fn build(self) -> Result<ModuleConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
