//! Shared utility helpers.

pub mod error;
pub mod math;

pub use error::{AngleRangeError, Result as AngleRangeResult};
pub use math::{norm_deg, wrap_deg};
