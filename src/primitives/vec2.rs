//! 2D vector backed by nalgebra's `Vector2<f64>`.

use crate::angle::clamp_unit;
use crate::error::{MathError, MathResult};
use nalgebra::Vector2;
use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector of `f64` components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    data: Vector2<f64>,
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2(x: {:.4}, y: {:.4})", self.x(), self.y())
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vector2<f64>> for Vec2 {
    fn from(data: Vector2<f64>) -> Self {
        Self { data }
    }
}

impl From<Vec2> for Vector2<f64> {
    fn from(v: Vec2) -> Self {
        v.data
    }
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            data: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            data: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.data.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.data.y
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector2<f64> {
        &self.data
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.data = Vector2::new(x, y);
    }

    pub fn set_zero(&mut self) {
        self.data.fill(0.0);
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data * factor,
        }
    }

    #[inline]
    pub fn scale_mut(&mut self, factor: f64) {
        self.data *= factor;
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.data.dot(&other.data)
    }

    /// Z component of the 3D cross product of the two vectors lifted to z = 0.
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.data.norm()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.data.norm_squared()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.data - other.data).norm()
    }

    pub fn normalize(&self) -> MathResult<Self> {
        let mut out = *self;
        out.normalize_mut()?;
        Ok(out)
    }

    /// Normalize in place and return the length before normalization.
    pub fn normalize_mut(&mut self) -> MathResult<f64> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::ZeroLength);
        }

        self.data /= length;
        Ok(length)
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        -*self
    }

    pub fn reverse_mut(&mut self) {
        self.data.neg_mut();
    }

    /// Exchange the x and y components.
    pub fn swap(&self) -> Self {
        Self::new(self.y(), self.x())
    }

    pub fn swap_mut(&mut self) {
        self.data.swap_rows(0, 1);
    }

    /// Rotate counter-clockwise by `theta` radians about the origin.
    pub fn rotate(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            cos * self.x() - sin * self.y(),
            sin * self.x() + cos * self.y(),
        )
    }

    pub fn rotate_mut(&mut self, theta: f64) {
        *self = self.rotate(theta);
    }

    /// Rotate counter-clockwise by `theta` radians about `center`.
    pub fn rotate_about(&self, theta: f64, center: &Self) -> Self {
        (*self - *center).rotate(theta) + *center
    }

    pub fn projection_onto(&self, onto: &Self) -> MathResult<Self> {
        let length_sq = onto.length_squared();
        if length_sq == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(onto.scale(self.dot(onto) / length_sq))
    }

    /// Reflect about the line whose normal is `normal`.
    pub fn reflection(&self, normal: &Self) -> MathResult<Self> {
        let length_sq = normal.length_squared();
        if length_sq == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(*self - normal.scale(2.0 * self.dot(normal) / length_sq))
    }

    pub fn cos_angle_between(&self, other: &Self) -> MathResult<f64> {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(self.dot(other) / lengths)
    }

    pub fn angle_between(&self, other: &Self) -> MathResult<f64> {
        Ok(clamp_unit(self.cos_angle_between(other)?).acos())
    }

    /// Perpendicular obtained by a quarter turn counter-clockwise.
    pub fn left_perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Perpendicular obtained by a quarter turn clockwise.
    pub fn right_perpendicular(&self) -> Self {
        Self::new(self.y(), -self.x())
    }

    pub fn lerp(&self, other: &Self, t: f64) -> MathResult<Self> {
        if !(0.0..=1.0).contains(&t) {
            return Err(MathError::InvalidInterpolationParameter);
        }

        Ok(Self {
            data: self.data + (other.data - self.data) * t,
        })
    }

    pub fn lerp_mut(&mut self, other: &Self, t: f64) -> MathResult<()> {
        *self = self.lerp(other, t)?;
        Ok(())
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.data - other.data).amax() < tolerance
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            data: self.data + rhs.data,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.data += rhs.data;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            data: self.data - rhs.data,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.data -= rhs.data;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { data: -self.data }
    }
}
