//! Quaternion rotation algebra backed by nalgebra's `Quaternion<f64>`.
//!
//! Unlike a unit-quaternion type, [`Quaternion`] stores whatever components it
//! is given: arithmetic (`+`, `-`, scaling) routinely leaves the unit sphere.
//! Operations that need a rotation ([`Quaternion::rotate_vector`],
//! [`Quaternion::to_axis_angle`], interpolation) normalize a copy first and
//! report [`MathError::ZeroMagnitude`] or [`MathError::NormalizeFailed`] when
//! that is impossible.
//!
//! # Examples
//!
//! ```
//! use spatial_rotations::{AxisAngle, Quaternion, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = AxisAngle::about_z(FRAC_PI_2).to_quaternion().unwrap();
//! let v = q.rotate_vector(&Vec3::unit_x()).unwrap();
//! assert!(v.approx_eq(&Vec3::unit_y(), 1e-12));
//! ```

use crate::angle::clamp_unit;
use crate::error::{Degenerate, MathError, MathResult};
use crate::primitives::{Matrix3, Vec3};
use crate::rotation::{AxisAngle, EulerAngle, Rotation, RotationMatrix};
use nalgebra::Quaternion as NaQuaternion;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::{debug, trace};

/// Above this cosine of the half-angle between operands, slerp falls back to lerp.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// Rotation angles below this are reported as [`MathError::InsignificantAngle`].
pub const INSIGNIFICANT_ANGLE: f64 = 1e-10;

/// A quaternion `w + xi + yj + zk`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    data: NaQuaternion<f64>,
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w: {:.4}, x: {:.4}, y: {:.4}, z: {:.4})",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<NaQuaternion<f64>> for Quaternion {
    fn from(data: NaQuaternion<f64>) -> Self {
        Self { data }
    }
}

impl From<Quaternion> for NaQuaternion<f64> {
    fn from(q: Quaternion) -> Self {
        q.data
    }
}

impl Quaternion {
    /// Create a quaternion from raw components; no normalization is applied.
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            data: NaQuaternion::new(w, x, y, z),
        }
    }

    /// Create the identity rotation (w=1, x=y=z=0).
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Pure quaternion `(0, v)`.
    #[inline]
    pub fn from_vector(v: &Vec3) -> Self {
        Self::new(0.0, v.x(), v.y(), v.z())
    }

    /// # Errors
    /// [`MathError::ZeroLength`] if the axis is the zero vector.
    pub fn from_axis_angle(axis_angle: &AxisAngle) -> MathResult<Self> {
        axis_angle.to_quaternion()
    }

    /// Create a unit quaternion from Euler angles, `R = Rz(yaw) · Ry(pitch) · Rx(roll)`.
    pub fn from_euler_angles(euler: &EulerAngle) -> Self {
        let (sr, cr) = (euler.roll * 0.5).sin_cos();
        let (sp, cp) = (euler.pitch * 0.5).sin_cos();
        let (sy, cy) = (euler.yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Shepperd's method; see [`RotationMatrix::to_quaternion`].
    pub fn from_rotation_matrix(matrix: &RotationMatrix) -> Self {
        matrix.to_quaternion()
    }

    /// Uniformly distributed random unit quaternion (Shoemake's method).
    pub fn random() -> Self {
        let u1: f64 = rand::random();
        let u2: f64 = rand::random();
        let u3: f64 = rand::random();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        let (s2, c2) = (TAU * u2).sin_cos();
        let (s3, c3) = (TAU * u3).sin_cos();

        Self::new(b * c3, a * s2, a * c2, b * s3)
    }

    pub fn set(&mut self, w: f64, x: f64, y: f64, z: f64) {
        self.data = NaQuaternion::new(w, x, y, z);
    }

    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    /// On error `self` is left unchanged.
    pub fn set_from_axis_angle(&mut self, axis_angle: &AxisAngle) -> MathResult<()> {
        *self = axis_angle.to_quaternion()?;
        Ok(())
    }

    pub fn set_from_euler_angles(&mut self, euler: &EulerAngle) {
        *self = Self::from_euler_angles(euler);
    }

    pub fn set_from_rotation_matrix(&mut self, matrix: &RotationMatrix) {
        *self = matrix.to_quaternion();
    }

    /// Get the scalar (real) component w.
    #[inline]
    pub fn w(&self) -> f64 {
        self.data.w
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.data.i
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.data.j
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.data.k
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.w(), self.x(), self.y(), self.z()]
    }

    /// The vector (imaginary) part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    #[inline]
    pub fn as_quaternion(&self) -> &NaQuaternion<f64> {
        &self.data
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data * factor,
        }
    }

    pub fn scale_mut(&mut self, factor: f64) {
        self.data *= factor;
    }

    pub fn negate_mut(&mut self) {
        self.data = -self.data;
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.data.norm()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.data.norm_squared()
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.data.coords.dot(&other.data.coords)
    }

    /// Normalized copy.
    ///
    /// # Errors
    /// [`MathError::ZeroMagnitude`] if every component is zero.
    pub fn normalize(&self) -> MathResult<Self> {
        let mut out = *self;
        out.normalize_mut()?;
        Ok(out)
    }

    /// Normalize in place and return the magnitude before normalization.
    ///
    /// On error the quaternion is left unchanged.
    pub fn normalize_mut(&mut self) -> MathResult<f64> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            trace!("refusing to normalize a zero quaternion");
            return Err(MathError::ZeroMagnitude);
        }

        self.data /= magnitude;
        Ok(magnitude)
    }

    /// Alias of [`Quaternion::normalize`], reading as "the direction of q".
    #[inline]
    pub fn direction(&self) -> MathResult<Self> {
        self.normalize()
    }

    pub fn conjugate(&self) -> Self {
        Self {
            data: self.data.conjugate(),
        }
    }

    pub fn conjugate_mut(&mut self) {
        self.data = self.data.conjugate();
    }

    /// Multiplicative inverse `q* / |q|²`; equals the conjugate for unit quaternions.
    ///
    /// # Errors
    /// [`MathError::ZeroMagnitude`] if `|q|² == 0`.
    pub fn inverse(&self) -> MathResult<Self> {
        let norm_sq = self.dot(self);
        if norm_sq == 0.0 {
            return Err(MathError::ZeroMagnitude);
        }

        Ok(self.conjugate().scale(1.0 / norm_sq))
    }

    pub fn inverse_mut(&mut self) -> MathResult<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Hamilton product `self * other` (apply `other` first, then `self`).
    pub fn multiply(&self, other: &Self) -> Self {
        let (w1, x1, y1, z1) = (self.w(), self.x(), self.y(), self.z());
        let (w2, x2, y2, z2) = (other.w(), other.x(), other.y(), other.z());

        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }

    pub fn multiply_mut(&mut self, other: &Self) {
        *self = self.multiply(other);
    }

    /// Rotate `v` by the sandwich product `q · (0, v) · q⁻¹`.
    ///
    /// `self` is normalized first, so any non-zero quaternion is accepted.
    ///
    /// # Errors
    /// [`MathError::ZeroMagnitude`] if `self` is zero.
    pub fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        let q = self.normalize()?;
        let q_inv = q.inverse()?;
        let rotated = q * Self::from_vector(v) * q_inv;
        Ok(rotated.vector())
    }

    /// Axis and angle of the rotation, with the angle in `[0, 2π]`.
    ///
    /// # Errors
    /// A [`Degenerate`] carrying the identity axis-angle `((1, 0, 0), 0)` when
    /// - the angle is below [`INSIGNIFICANT_ANGLE`] ([`MathError::InsignificantAngle`],
    ///   a soft condition meaning "no rotation"),
    /// - `self` is zero ([`MathError::ZeroMagnitude`]),
    /// - the vector part vanishes at a full turn ([`MathError::ZeroLength`]).
    pub fn to_axis_angle(&self) -> Result<AxisAngle, Degenerate<AxisAngle>> {
        let degenerate = |error| Degenerate::new(AxisAngle::identity(), error);

        let q = self.normalize().map_err(degenerate)?;
        let w = clamp_unit(q.w());
        let angle = 2.0 * w.acos();

        if angle < INSIGNIFICANT_ANGLE {
            debug!(angle, "insignificant rotation angle, axis is arbitrary");
            return Err(degenerate(MathError::InsignificantAngle));
        }

        let sin_half = (1.0 - w * w).sqrt();
        let axis = if sin_half > 0.0 {
            q.vector().scale(1.0 / sin_half)
        } else {
            q.vector()
        };

        let axis = axis.normalize().map_err(degenerate)?;
        Ok(AxisAngle::new(axis, angle))
    }

    /// Euler angles in the `"XYZ"` convention, `R = Rz(yaw) · Ry(pitch) · Rx(roll)`.
    ///
    /// At gimbal lock the pitch saturates at ±π/2 instead of producing NaN.
    pub fn to_euler_angles(&self) -> EulerAngle {
        let (w, x, y, z) = (self.w(), self.x(), self.y(), self.z());

        // Roll (x-axis rotation)
        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        // Pitch (y-axis rotation)
        let sinp = 2.0 * (w * y - z * x);
        let pitch = if sinp.abs() >= 1.0 {
            FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        // Yaw (z-axis rotation)
        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        EulerAngle::new(roll, pitch, yaw)
    }

    /// Rotation matrix of a unit quaternion, tagged as quaternion-derived.
    pub fn to_rotation_matrix(&self) -> RotationMatrix {
        let (w, x, y, z) = (self.w(), self.x(), self.y(), self.z());

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        RotationMatrix::quaternion_derived(Matrix3::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ]))
    }

    /// Rotation angle in radians, `2·acos(w)` of the normalized quaternion.
    pub fn angle(&self) -> MathResult<f64> {
        let q = self.normalize()?;
        Ok(2.0 * clamp_unit(q.w()).acos())
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Both operands are normalized first. When they are nearly parallel the
    /// result is computed by [`Quaternion::lerp`] instead.
    ///
    /// # Errors
    /// - [`MathError::InvalidInterpolationParameter`] if `t` is outside `[0, 1]`.
    /// - [`MathError::NormalizeFailed`] if an operand or the result has zero magnitude.
    pub fn slerp(&self, other: &Self, t: f64) -> MathResult<Self> {
        check_parameter(t)?;

        let q1 = self.normalize().map_err(|_| MathError::NormalizeFailed)?;
        let mut q2 = other.normalize().map_err(|_| MathError::NormalizeFailed)?;

        let mut dot = clamp_unit(q1.dot(&q2));

        // Ensure shortest path
        if dot < 0.0 {
            trace!(dot, "negating slerp target for the shorter arc");
            q2 = -q2;
            dot = -dot;
        }

        if dot > SLERP_LINEAR_THRESHOLD {
            trace!(dot, "operands nearly parallel, using lerp");
            return q1.lerp(&q2, t);
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let s1 = ((1.0 - t) * theta).sin() / sin_theta;
        let s2 = (t * theta).sin() / sin_theta;

        (q1 * s1 + q2 * s2)
            .normalize()
            .map_err(|_| MathError::NormalizeFailed)
    }

    pub fn slerp_mut(&mut self, other: &Self, t: f64) -> MathResult<()> {
        *self = self.slerp(other, t)?;
        Ok(())
    }

    /// Normalized linear interpolation `(1 − t)·q1 + t·q2`.
    ///
    /// No shortest-path correction is applied, so interpolating between `q`
    /// and `−q` passes through zero at `t = 0.5` and fails.
    ///
    /// # Errors
    /// Same as [`Quaternion::slerp`].
    pub fn lerp(&self, other: &Self, t: f64) -> MathResult<Self> {
        check_parameter(t)?;

        let q1 = self.normalize().map_err(|_| MathError::NormalizeFailed)?;
        let q2 = other.normalize().map_err(|_| MathError::NormalizeFailed)?;

        (q1 * (1.0 - t) + q2 * t)
            .normalize()
            .map_err(|_| MathError::NormalizeFailed)
    }

    pub fn lerp_mut(&mut self, other: &Self, t: f64) -> MathResult<()> {
        *self = self.lerp(other, t)?;
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.coords() == [0.0; 4]
    }

    /// Exact component-wise equality.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.data == other.data
    }

    /// Check if this is approximately equal to another quaternion.
    ///
    /// Accounts for quaternion double-cover (q and -q represent the same rotation).
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.data.coords - other.data.coords).amax() < tolerance
            || (self.data.coords + other.data.coords).amax() < tolerance
    }
}

fn check_parameter(t: f64) -> MathResult<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(MathError::InvalidInterpolationParameter)
    }
}

impl Rotation for Quaternion {
    fn to_quaternion(&self) -> MathResult<Quaternion> {
        self.normalize()
    }

    fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        Quaternion::rotate_vector(self, v)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            data: self.data + rhs.data,
        }
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Quaternion) {
        self.data += rhs.data;
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            data: self.data - rhs.data,
        }
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Quaternion) {
        self.data -= rhs.data;
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        self.multiply_mut(&rhs);
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f64) -> Quaternion {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion { data: -self.data }
    }
}

// ============================================================================
// Tests
// ============================================================================
