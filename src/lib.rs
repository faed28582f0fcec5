//! # embedded-swerve
//! A `#![no_std]` steering library for swerve drive modules
//!
//! # Steering
//! [`angle`] wraps angles (in degrees) into the legal range `(-180, 180]`
//! and calculates the shortest path between them.
//!
//! [`Decapitation`](steering::Decapitation) resolves a wheel target that never needs more
//! than 90 degrees of rotation, inverting the drive direction when the target is folded.
//!
//! [`ContinuityGuard`](steering::ContinuityGuard) keeps rotation deltas from flipping
//! direction across the wrap boundary.
//!
//! # Modules
//! [`SwerveModule`] composes the steering state with a [`RotationControl`] and a traction
//! [`Actuator`] from the hardware abstraction layer in [`hal`].
//!
//! ```
//! use embedded_swerve::steering::{Decapitation, Spin};
//!
//! let mut decapitation = Decapitation::default();
//!
//! // Facing 0, the wheel reaches 170 by rotating to -10 and driving backwards
//! let resolution = decapitation.resolve(0., 170.).unwrap();
//! assert_eq!(resolution.target, -10.);
//! assert_eq!(resolution.spin, Spin::Inverted);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod angle;

mod config;
pub use config::{Builder as ConfigBuilder, ModuleConfig};

mod error;
pub use error::{Error, Result};

pub mod hal;
pub use hal::{Actuator, RotationMotor, TractionMotor};

mod module;
pub use module::SwerveModule;

mod rotation;
pub use rotation::RotationControl;

pub mod steering;
pub use steering::{Resolution, Spin};
