//! Degree normalization helpers.

/// One full rotation in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalizes an angle in degrees to the half-open range [0, 360).
///
/// Any finite input is accepted: negative, fractional, or spanning several
/// rotations. Non-finite inputs propagate as `NaN`.
#[inline]
pub fn norm_deg(angle_deg: f64) -> f64 {
    let norm = angle_deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if norm >= FULL_TURN_DEG {
        0.0
    } else {
        norm
    }
}

/// Wraps an angle in degrees to the range [-180, 180).
#[inline]
pub fn wrap_deg(angle_deg: f64) -> f64 {
    let wrapped = norm_deg(angle_deg);
    if wrapped >= 180.0 {
        wrapped - FULL_TURN_DEG
    } else {
        wrapped
    }
}
