/// An error raised by the steering core.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A NaN or infinite angle (in degrees) was passed to the core.
    #[error("invalid angle: {0}")]
    InvalidAngle(f32),

    /// A module configuration value was out of range.
    #[error("invalid module configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
