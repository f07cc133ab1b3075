//! Scalar angle helpers shared by the rotation representations.

use std::f64::consts::{PI, TAU};

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Wrap an angle into [-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let mut wrapped = angle % TAU;

    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped < -PI {
        wrapped += TAU;
    }

    wrapped
}

/// Wrap an angle into [0, 2π).
pub fn normalize_angle_two_pi(angle: f64) -> f64 {
    let mut wrapped = angle % TAU;

    if wrapped < 0.0 {
        wrapped += TAU;
    }

    // -ε + 2π can round up to exactly 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Clamp a cosine/sine value into the domain of `acos`/`asin`.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
