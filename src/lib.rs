//! Normalized angular intervals in degrees.
//!
//! [`AngleRange`] stores two bounds folded into [0, 360) and answers
//! membership queries, treating a lower bound above the upper bound as an arc
//! that crosses the 0/360 seam. It is meant for facing checks and vision
//! cones where directions wrap around.

pub mod range;
mod trace;
pub mod util;

pub use range::AngleRange;
pub use util::{norm_deg, wrap_deg, AngleRangeError, AngleRangeResult};
