//! 3D vector backed by nalgebra's `Vector3<f64>`.
//!
//! Operations that mutate come in pairs: a value-returning form (`normalize`,
//! `lerp`, ...) and an in-place `_mut` form that writes the result back into
//! `self`. Arithmetic uses the std operator traits, whose `*Assign` variants are
//! the in-place counterparts.

use crate::angle::clamp_unit;
use crate::error::{MathError, MathResult};
use crate::rotation::Rotation;
use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// Above this cosine two directions are treated as parallel and slerp falls back to lerp.
pub const VEC_SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// A 3D vector of `f64` components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    data: Vector3<f64>,
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vec3(x: {:.4}, y: {:.4}, z: {:.4})",
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(data: Vector3<f64>) -> Self {
        Self { data }
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        v.data
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl Vec3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            data: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            data: Vector3::zeros(),
        }
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
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
    pub fn z(&self) -> f64 {
        self.data.z
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn coords(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Borrow the underlying nalgebra vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.data
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.data = Vector3::new(x, y, z);
    }

    pub fn set_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Multiply every component by `factor`.
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

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            data: self.data.cross(&other.data),
        }
    }

    pub fn cross_mut(&mut self, other: &Self) {
        *self = self.cross(other);
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.data.norm()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.data.norm_squared()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.data - other.data).norm()
    }

    /// Unit vector with the same direction.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] if the vector has zero length.
    pub fn normalize(&self) -> MathResult<Self> {
        let mut out = *self;
        out.normalize_mut()?;
        Ok(out)
    }

    /// Normalize in place and return the length before normalization.
    ///
    /// On error the vector is left untouched.
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

    /// Projection of `self` onto the direction of `onto`.
    pub fn projection_onto(&self, onto: &Self) -> MathResult<Self> {
        let length_sq = onto.length_squared();
        if length_sq == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(onto.scale(self.dot(onto) / length_sq))
    }

    /// Reflect `self` about the plane whose normal is `normal` (need not be unit).
    pub fn reflection(&self, normal: &Self) -> MathResult<Self> {
        let length_sq = normal.length_squared();
        if length_sq == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(*self - normal.scale(2.0 * self.dot(normal) / length_sq))
    }

    /// Cosine of the angle between two vectors.
    pub fn cos_angle_between(&self, other: &Self) -> MathResult<f64> {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(self.dot(other) / lengths)
    }

    /// Unsigned angle between two vectors, in [0, π].
    pub fn angle_between(&self, other: &Self) -> MathResult<f64> {
        Ok(clamp_unit(self.cos_angle_between(other)?).acos())
    }

    /// Linear interpolation `self + t * (other - self)` for `t` in [0, 1].
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

    /// Spherical interpolation between the directions of `self` and `other`.
    ///
    /// Both inputs are normalized first, so the result is always a unit vector.
    /// Nearly parallel directions fall back to a normalized lerp. Nearly
    /// opposite directions rotate about their common normal, and exactly
    /// opposite ones about an arbitrary axis perpendicular to `self`.
    ///
    /// # Errors
    /// - [`MathError::InvalidInterpolationParameter`] if `t` is outside [0, 1]
    /// - [`MathError::NormalizeFailed`] if either input has zero length
    pub fn slerp(&self, other: &Self, t: f64) -> MathResult<Self> {
        if !(0.0..=1.0).contains(&t) {
            return Err(MathError::InvalidInterpolationParameter);
        }

        let from = self.normalize().map_err(|_| MathError::NormalizeFailed)?;
        let to = other.normalize().map_err(|_| MathError::NormalizeFailed)?;

        let dot = clamp_unit(from.dot(&to));

        if dot > VEC_SLERP_LINEAR_THRESHOLD {
            return from
                .lerp(&to, t)?
                .normalize()
                .map_err(|_| MathError::NormalizeFailed);
        }

        if dot < -VEC_SLERP_LINEAR_THRESHOLD {
            // The weights below lose precision as sinθ → 0; rotate about the
            // common normal instead, or any perpendicular when there is none.
            let axis = match from.cross(&to).normalize() {
                Ok(axis) => axis,
                Err(_) => {
                    tracing::trace!(
                        "vector slerp between opposite directions, rotating about a perpendicular axis"
                    );
                    from
                        .smallest_axis()
                        .cross(&from)
                        .normalize()
                        .map_err(|_| MathError::NormalizeFailed)?
                }
            };
            return Ok(rotate_about_unit_axis(&from, &axis, t * dot.acos()));
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();

        let s1 = ((1.0 - t) * theta).sin() / sin_theta;
        let s2 = (t * theta).sin() / sin_theta;

        (from.scale(s1) + to.scale(s2))
            .normalize()
            .map_err(|_| MathError::NormalizeFailed)
    }

    pub fn slerp_mut(&mut self, other: &Self, t: f64) -> MathResult<()> {
        *self = self.slerp(other, t)?;
        Ok(())
    }

    /// Rotate by any rotation representation.
    pub fn rotate_by<R: Rotation>(&self, rotation: &R) -> MathResult<Self> {
        rotation.rotate_vector(self)
    }

    pub fn rotate_by_mut<R: Rotation>(&mut self, rotation: &R) -> MathResult<()> {
        *self = rotation.rotate_vector(self)?;
        Ok(())
    }

    /// Drop the depth component.
    pub fn orthographic_projection(&self) -> Self {
        Self::new(self.x(), self.y(), 0.0)
    }

    /// Pinhole projection onto the plane at `focal_length`.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] if the point has zero depth.
    pub fn perspective_projection(&self, focal_length: f64) -> MathResult<Self> {
        if self.z() == 0.0 {
            return Err(MathError::ZeroLength);
        }

        Ok(Self::new(
            self.x() * focal_length / self.z(),
            self.y() * focal_length / self.z(),
            0.0,
        ))
    }

    /// Exact component-wise equality.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.data - other.data).amax() < tolerance
    }

    /// Basis vector along the component with the smallest magnitude.
    fn smallest_axis(&self) -> Self {
        let (ax, ay, az) = (self.x().abs(), self.y().abs(), self.z().abs());
        if ax < ay && ax < az {
            Self::unit_x()
        } else if ay < az {
            Self::unit_y()
        } else {
            Self::unit_z()
        }
    }
}

/// Rodrigues' rotation of `v` about the unit vector `axis`.
///
/// v' = v cosθ + (k × v) sinθ + k (k·v)(1 − cosθ)
pub(crate) fn rotate_about_unit_axis(v: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v.scale(cos) + axis.cross(v).scale(sin) + axis.scale(axis.dot(v) * (1.0 - cos))
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            data: self.data + rhs.data,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.data += rhs.data;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            data: self.data - rhs.data,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.data -= rhs.data;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 { data: -self.data }
    }
}
