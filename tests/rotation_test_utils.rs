//! Shared sampling helpers for the rotation integration tests

#![allow(dead_code)]

use rand::Rng;
use spatial_rotations::{EulerAngle, Vec3};

/// Euler angles with the middle (pitch) angle kept at least `margin` away from ±π/2
pub fn random_euler_away_from_gimbal(margin: f64) -> EulerAngle {
    let mut rng = rand::rng();
    let limit = std::f64::consts::FRAC_PI_2 - margin;

    EulerAngle::new(
        rng.random_range(-3.0..3.0),
        rng.random_range(-limit..limit),
        rng.random_range(-3.0..3.0),
    )
}

/// Vector with components in [-scale, scale)
pub fn random_vector(scale: f64) -> Vec3 {
    Vec3::new(
        rand::random::<f64>() * 2.0 * scale - scale,
        rand::random::<f64>() * 2.0 * scale - scale,
        rand::random::<f64>() * 2.0 * scale - scale,
    )
}

/// Non-degenerate random axis (length at least 0.1 before normalization)
pub fn random_axis() -> Vec3 {
    loop {
        let v = random_vector(1.0);
        if v.length() > 0.1 {
            return v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_euler_respects_margin() {
        for _ in 0..100 {
            let e = random_euler_away_from_gimbal(0.2);
            assert!(e.pitch.abs() < std::f64::consts::FRAC_PI_2 - 0.2 + 1e-12);
        }
    }

    #[test]
    fn test_random_axis_is_usable() {
        for _ in 0..100 {
            assert!(random_axis().normalize().is_ok());
        }
    }
}
