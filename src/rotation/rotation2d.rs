//! Planar rotations as 2×2 matrices.

use crate::angle::{normalize_angle, to_degrees};
use crate::error::{MathError, MathResult};
use crate::primitives::{Matrix2, Vec2};
use std::fmt;

/// Reflection of a 2D rotation matrix, named by the axis kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reflection2 {
    X,
    Y,
}

/// Counter-clockwise rotation in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix2 {
    matrix: Matrix2,
}

impl fmt::Display for RotationMatrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RotationMatrix2(angle: {:.4}) {}", self.angle(), self.matrix)
    }
}

impl Default for RotationMatrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix2 {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    pub fn from_angle(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            matrix: Matrix2::from_rows([[c, -s], [s, c]]),
        }
    }

    /// Rotation taking the direction of `from` onto the direction of `to`.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] if either vector is zero.
    pub fn from_vectors(from: &Vec2, to: &Vec2) -> MathResult<Self> {
        if from.length_squared() == 0.0 || to.length_squared() == 0.0 {
            return Err(MathError::ZeroLength);
        }

        let theta = f64::atan2(from.cross(to), from.dot(to));
        Ok(Self::from_angle(normalize_angle(theta)))
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Rotation angle in `[-π, π]`.
    pub fn angle(&self) -> f64 {
        f64::atan2(self.matrix[(1, 0)], self.matrix[(0, 0)])
    }

    pub fn angle_degrees(&self) -> f64 {
        to_degrees(self.angle())
    }

    #[inline]
    pub fn rotate_vector(&self, v: &Vec2) -> Vec2 {
        self.matrix.mul_vec(v)
    }

    pub fn rotate_around_point(&self, v: &Vec2, center: &Vec2) -> Vec2 {
        self.rotate_vector(&(*v - *center)) + *center
    }

    pub fn reflect(&self, reflection: Reflection2) -> Self {
        let mut out = *self;
        out.reflect_mut(reflection);
        out
    }

    pub fn reflect_mut(&mut self, reflection: Reflection2) {
        let i = match reflection {
            Reflection2::X => 1,
            Reflection2::Y => 0,
        };
        self.matrix[(i, i)] = -self.matrix[(i, i)];
    }

    /// Interpolate the angle along the shorter arc.
    ///
    /// # Errors
    /// [`MathError::InvalidInterpolationParameter`] if `t` is outside `[0, 1]`.
    pub fn slerp(&self, target: &RotationMatrix2, t: f64) -> MathResult<Self> {
        if !(0.0..=1.0).contains(&t) {
            return Err(MathError::InvalidInterpolationParameter);
        }

        let start = self.angle();
        let delta = normalize_angle(target.angle() - start);
        Ok(Self::from_angle(start + t * delta))
    }

    pub fn slerp_mut(&mut self, target: &RotationMatrix2, t: f64) -> MathResult<()> {
        *self = self.slerp(target, t)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_from_angle_rotates_ccw() {
        let r = RotationMatrix2::from_angle(FRAC_PI_2);
        assert!(r.rotate_vector(&Vec2::new(1.0, 0.0)).approx_eq(&Vec2::new(0.0, 1.0), TOLERANCE));
        assert!((r.angle_degrees() - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_from_vectors_signed_angle() {
        let r = RotationMatrix2::from_vectors(&Vec2::new(0.0, 2.0), &Vec2::new(3.0, 0.0)).unwrap();
        assert!((r.angle() + FRAC_PI_2).abs() < TOLERANCE);

        let r = RotationMatrix2::from_vectors(&Vec2::new(1.0, 1.0), &Vec2::new(-1.0, 1.0)).unwrap();
        assert!((r.angle() - FRAC_PI_2).abs() < TOLERANCE);

        assert_eq!(
            RotationMatrix2::from_vectors(&Vec2::zero(), &Vec2::new(1.0, 0.0)),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn test_rotate_around_point() {
        let r = RotationMatrix2::from_angle(PI);
        let p = r.rotate_around_point(&Vec2::new(2.0, 1.0), &Vec2::new(1.0, 1.0));
        assert!(p.approx_eq(&Vec2::new(0.0, 1.0), TOLERANCE));
    }

    #[test]
    fn test_reflect() {
        let r = RotationMatrix2::from_angle(0.3);
        let reflected = r.reflect(Reflection2::X);
        assert_eq!(reflected.matrix()[(1, 1)], -r.matrix()[(1, 1)]);
        assert_eq!(reflected.matrix()[(0, 0)], r.matrix()[(0, 0)]);

        let mut twice = r;
        twice.reflect_mut(Reflection2::Y);
        twice.reflect_mut(Reflection2::Y);
        assert_eq!(twice, r);
    }

    #[test]
    fn test_slerp_takes_short_arc() {
        let a = RotationMatrix2::from_angle(3.0);
        let b = RotationMatrix2::from_angle(-3.0);
        let mid = a.slerp(&b, 0.5).unwrap();
        assert!((mid.angle().abs() - PI).abs() < 1e-9, "mid angle {}", mid.angle());

        assert!(a.slerp(&b, 0.0).unwrap().matrix().approx_eq(a.matrix(), TOLERANCE));
        assert!(a.slerp(&b, 1.0).unwrap().matrix().approx_eq(b.matrix(), TOLERANCE));
        assert_eq!(a.slerp(&b, 2.0), Err(MathError::InvalidInterpolationParameter));
    }
}
