//! Closed angular intervals in degrees with wraparound at the 0/360 seam.

use std::fmt;

use crate::trace::trace_event;
use crate::util::math::{norm_deg, wrap_deg, FULL_TURN_DEG};
use crate::util::{AngleRangeError, AngleRangeResult};

/// A closed arc of angles between two normalized bounds.
///
/// Both bounds are stored in [0, 360). When `min_deg > max_deg` the arc
/// crosses the seam: `AngleRange::new(350.0, 10.0)` covers 350..360 and 0..10.
/// Equal bounds describe a single direction, so `AngleRange::new(0.0, 360.0)`
/// contains only 0 and is not a full circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    min_deg: f64,
    max_deg: f64,
}

impl AngleRange {
    /// Creates a range from two raw angles in degrees.
    ///
    /// Each bound is normalized independently; either ordering is valid.
    pub fn new(min_deg: f64, max_deg: f64) -> Self {
        Self {
            min_deg: norm_deg(min_deg),
            max_deg: norm_deg(max_deg),
        }
    }

    /// Creates a range, rejecting non-finite bounds.
    pub fn try_new(min_deg: f64, max_deg: f64) -> AngleRangeResult<Self> {
        check_finite("min_deg", min_deg)?;
        check_finite("max_deg", max_deg)?;
        Ok(Self::new(min_deg, max_deg))
    }

    /// Creates the range `[center - half_width, center + half_width]`.
    ///
    /// `half_width_deg` must lie in [0, 180); a half width of 180 would
    /// normalize both bounds onto the same direction.
    pub fn around(center_deg: f64, half_width_deg: f64) -> AngleRangeResult<Self> {
        check_finite("center_deg", center_deg)?;
        if !(0.0..180.0).contains(&half_width_deg) {
            trace_event!("angle_range.rejected_half_width", half_width_deg = half_width_deg);
            return Err(AngleRangeError::InvalidHalfWidth { half_width_deg });
        }
        Ok(Self::new(
            center_deg - half_width_deg,
            center_deg + half_width_deg,
        ))
    }

    /// Returns the normalized lower bound in degrees (inclusive).
    pub fn min_deg(&self) -> f64 {
        self.min_deg
    }

    /// Returns the normalized upper bound in degrees (inclusive).
    pub fn max_deg(&self) -> f64 {
        self.max_deg
    }

    /// Returns true if the arc crosses the 0/360 seam.
    pub fn is_wrapping(&self) -> bool {
        self.min_deg > self.max_deg
    }

    /// Returns the arc length covered by the range in degrees, in [0, 360].
    ///
    /// A wrapping range whose gap is below the float resolution near 360
    /// reports a full turn.
    pub fn span_deg(&self) -> f64 {
        if self.is_wrapping() {
            FULL_TURN_DEG - self.min_deg + self.max_deg
        } else {
            self.max_deg - self.min_deg
        }
    }

    /// Returns the signed offset of `angle_deg` from the middle of the arc,
    /// in [-180, 180).
    pub fn offset_from_center(&self, angle_deg: f64) -> f64 {
        let center = self.min_deg + 0.5 * self.span_deg();
        wrap_deg(angle_deg - center)
    }

    /// Checks whether `angle_deg` lies on the arc, bounds included.
    pub fn contains(&self, angle_deg: f64) -> bool {
        let angle = norm_deg(angle_deg);
        if self.is_wrapping() {
            angle >= self.min_deg || angle <= self.max_deg
        } else {
            angle >= self.min_deg && angle <= self.max_deg
        }
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}°, {}°]", self.min_deg, self.max_deg)
    }
}

fn check_finite(name: &'static str, value: f64) -> AngleRangeResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        trace_event!("angle_range.rejected_angle", argument = name, value = value);
        Err(AngleRangeError::NonFiniteAngle { name })
    }
}
