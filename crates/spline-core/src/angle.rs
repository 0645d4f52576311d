//! Tilt angle conversion.
//!
//! Curves store tilt in radians; interchange documents store it in degrees.

use std::f64::consts::PI;

/// Degrees per radian.
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Radians per degree.
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// Convert a tilt in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

/// Convert a tilt in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}
