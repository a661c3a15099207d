//! Error types for anglerange.

use thiserror::Error;

/// Result alias for anglerange operations.
pub type Result<T> = std::result::Result<T, AngleRangeError>;

/// Errors surfaced by the checked range constructors.
#[derive(Debug, Error, PartialEq)]
pub enum AngleRangeError {
    /// An angle argument was infinite or NaN.
    #[error("{name} must be a finite angle in degrees")]
    NonFiniteAngle { name: &'static str },
    /// The half width of a centred range is outside [0, 180).
    #[error("half width must be in [0, 180) degrees, got {half_width_deg}")]
    InvalidHalfWidth { half_width_deg: f64 },
}
