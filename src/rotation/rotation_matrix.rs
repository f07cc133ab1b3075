//! 3×3 rotation matrix tagged with the order of its elemental rotations.
//!
//! A [`RotationMatrix`] remembers how it was built (see [`RotationOrder`]) so
//! that Euler angles can be extracted unambiguously. Only matrices carrying a
//! full [`Permutation`] support [`RotationMatrix::to_euler_angles`].
//!
//! # Examples
//!
//! ```
//! use spatial_rotations::RotationMatrix;
//!
//! let r = RotationMatrix::from_order("ZYX", 0.1, 0.2, 0.3).unwrap();
//! let e = r.to_euler_angles().unwrap();
//! assert!((e.pitch - 0.2).abs() < 1e-12);
//! ```

use crate::angle::clamp_unit;
use crate::error::{Degenerate, MathError, MathResult};
use crate::primitives::{Matrix3, Vec3};
use crate::rotation::{
    Axis, AxisAngle, EulerAngle, Permutation, Quaternion, Reflection, Rotation, RotationOrder,
};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Mul;
use tracing::{debug, trace};

/// `|sin(middle angle)|` at or above which Euler extraction takes the gimbal-lock branch.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.99999;

/// Angles below this are treated as no rotation when extracting an axis, and
/// angles within this of π use the symmetric-part axis recovery.
pub const NEAR_IDENTITY_ANGLE: f64 = 1e-6;

/// A 3D rotation matrix together with its composition order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    matrix: Matrix3,
    order: RotationOrder,
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix(order: {}) [", self.order)?;
        for row in self.matrix.rows() {
            writeln!(f, "  [{:.4}, {:.4}, {:.4}]", row[0], row[1], row[2])?;
        }
        write!(f, "]")
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix {
    /// The identity rotation, untagged.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            order: RotationOrder::Untagged,
        }
    }

    /// Wrap an arbitrary matrix without checking orthonormality.
    pub fn from_matrix(matrix: Matrix3) -> Self {
        Self {
            matrix,
            order: RotationOrder::Untagged,
        }
    }

    /// Reset to the identity and drop the order tag.
    pub fn clear(&mut self) {
        self.matrix.set_identity();
        self.order = RotationOrder::Untagged;
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    #[inline]
    pub fn order(&self) -> RotationOrder {
        self.order
    }

    /// Rotation by `angle` radians about a single coordinate axis.
    pub fn elemental(axis: Axis, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let matrix = match axis {
            Axis::X => Matrix3::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]),
            Axis::Y => Matrix3::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]),
            Axis::Z => Matrix3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]),
        };

        Self {
            matrix,
            order: RotationOrder::Single(axis),
        }
    }

    #[inline]
    pub fn about_x(angle: f64) -> Self {
        Self::elemental(Axis::X, angle)
    }

    #[inline]
    pub fn about_y(angle: f64) -> Self {
        Self::elemental(Axis::Y, angle)
    }

    #[inline]
    pub fn about_z(angle: f64) -> Self {
        Self::elemental(Axis::Z, angle)
    }

    /// Compose three elemental rotations in the order named by `order`.
    ///
    /// `roll` is used for X, `pitch` for Y and `yaw` for Z. The first letter
    /// is applied first, so `"XYZ"` yields `Rz(yaw) · Ry(pitch) · Rx(roll)`.
    ///
    /// # Errors
    /// [`MathError::InvalidRotationOrder`] unless `order` is a permutation of
    /// `X`, `Y`, `Z` (case-insensitive).
    pub fn from_order(order: &str, roll: f64, pitch: f64, yaw: f64) -> MathResult<Self> {
        let permutation: Permutation = order.parse()?;
        Ok(Self::from_permutation(permutation, roll, pitch, yaw))
    }

    /// In-place form of [`RotationMatrix::from_order`]; `self` is untouched on error.
    pub fn set_from_order(&mut self, order: &str, roll: f64, pitch: f64, yaw: f64) -> MathResult<()> {
        *self = Self::from_order(order, roll, pitch, yaw)?;
        Ok(())
    }

    pub fn from_permutation(permutation: Permutation, roll: f64, pitch: f64, yaw: f64) -> Self {
        let mut matrix = Matrix3::identity();
        for axis in permutation.axes() {
            let angle = match axis {
                Axis::X => roll,
                Axis::Y => pitch,
                Axis::Z => yaw,
            };
            matrix = Self::elemental(axis, angle).matrix * matrix;
        }

        Self {
            matrix,
            order: RotationOrder::Composed(permutation),
        }
    }

    pub fn from_euler_angles(euler: &EulerAngle, order: &str) -> MathResult<Self> {
        Self::from_order(order, euler.roll, euler.pitch, euler.yaw)
    }

    /// Equivalent of [`Quaternion::to_rotation_matrix`], tagged quaternion-derived.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        q.to_rotation_matrix()
    }

    pub fn from_axis_angle(axis_angle: &AxisAngle) -> Result<Self, Degenerate<Self>> {
        axis_angle.to_rotation_matrix()
    }

    /// Uniformly distributed random rotation.
    pub fn random() -> Self {
        Quaternion::random().to_rotation_matrix()
    }

    /// Re-tag a matrix as composed in `permutation` order.
    ///
    /// Any proper rotation can be decomposed in every order; this only tells
    /// [`RotationMatrix::to_euler_angles`] which decomposition to use.
    pub fn assume_order(mut self, permutation: Permutation) -> Self {
        self.order = RotationOrder::Composed(permutation);
        self
    }

    /// Left-multiply by a single-axis rotation, extending the order tag.
    ///
    /// Three successive calls on an identity build the same matrix as
    /// [`RotationMatrix::from_order`] with the letters in call order.
    ///
    /// # Errors
    /// - [`MathError::TooManyAxes`] if three axes are already composed.
    /// - [`MathError::InvalidAxisRotation`] if `other` is not tagged with exactly
    ///   one axis, `self` is quaternion-derived, or `self` is untagged but not
    ///   the identity.
    /// - [`MathError::DuplicateAxis`] if `other`'s axis is already present.
    pub fn compose_single_axis(&mut self, other: &RotationMatrix) -> MathResult<()> {
        let RotationOrder::Single(axis) = other.order else {
            return Err(MathError::InvalidAxisRotation);
        };

        let order = match self.order {
            RotationOrder::Untagged if self.matrix.is_identity() => RotationOrder::Single(axis),
            RotationOrder::Untagged => return Err(MathError::InvalidAxisRotation),
            RotationOrder::Single(first) if first == axis => return Err(MathError::DuplicateAxis),
            RotationOrder::Single(first) => RotationOrder::Pair(first, axis),
            RotationOrder::Pair(first, second) => {
                if first == axis || second == axis {
                    return Err(MathError::DuplicateAxis);
                }
                RotationOrder::Composed(Permutation::from_axes([first, second, axis])?)
            }
            RotationOrder::Composed(_) => return Err(MathError::TooManyAxes),
            RotationOrder::QuaternionDerived => return Err(MathError::InvalidAxisRotation),
        };

        self.matrix = other.matrix * self.matrix;
        self.order = order;
        Ok(())
    }

    /// Pure form of [`RotationMatrix::compose_single_axis`].
    pub fn composed_with(&self, other: &RotationMatrix) -> MathResult<Self> {
        let mut out = *self;
        out.compose_single_axis(other)?;
        Ok(out)
    }

    /// Whether the matrix is orthonormal with determinant +1, within `tolerance`.
    pub fn is_rotation(&self, tolerance: f64) -> bool {
        let should_be_identity = self.matrix.transpose() * self.matrix;
        should_be_identity.approx_eq(&Matrix3::identity(), tolerance)
            && (self.matrix.determinant() - 1.0).abs() < tolerance
    }

    /// Extract `(roll, pitch, yaw)` for the composition order carried by the tag.
    ///
    /// `roll` is always the X angle, `pitch` Y and `yaw` Z. When the middle
    /// axis sits at ±90° the first and last axes coincide: the last-applied
    /// angle is set to zero and the first absorbs the whole rotation.
    ///
    /// # Errors
    /// [`MathError::UnsupportedRotationOrder`] unless the tag is a full permutation.
    pub fn to_euler_angles(&self) -> MathResult<EulerAngle> {
        let permutation = self
            .order
            .permutation()
            .ok_or(MathError::UnsupportedRotationOrder)?;

        let m = &self.matrix;
        let gimbal = |sin_middle: f64| {
            let locked = sin_middle.abs() >= GIMBAL_LOCK_THRESHOLD;
            if locked {
                debug!(
                    order = %permutation,
                    sin_middle,
                    "gimbal lock, zeroing last-applied Euler angle"
                );
            }
            locked
        };

        let euler = match permutation {
            Permutation::XYZ => {
                let s = -m[(2, 0)];
                let y = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(f64::atan2(-m[(1, 2)], m[(1, 1)]), y, 0.0)
                } else {
                    let x = f64::atan2(m[(2, 1)], m[(2, 2)]);
                    let z = f64::atan2(m[(1, 0)], m[(0, 0)]);
                    EulerAngle::new(x, y, z)
                }
            }
            Permutation::XZY => {
                let s = m[(1, 0)];
                let z = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(f64::atan2(m[(2, 1)], m[(2, 2)]), 0.0, z)
                } else {
                    let x = f64::atan2(-m[(1, 2)], m[(1, 1)]);
                    let y = f64::atan2(-m[(2, 0)], m[(0, 0)]);
                    EulerAngle::new(x, y, z)
                }
            }
            Permutation::YXZ => {
                let s = m[(2, 1)];
                let x = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(x, f64::atan2(m[(0, 2)], m[(0, 0)]), 0.0)
                } else {
                    let y = f64::atan2(-m[(2, 0)], m[(2, 2)]);
                    let z = f64::atan2(-m[(0, 1)], m[(1, 1)]);
                    EulerAngle::new(x, y, z)
                }
            }
            Permutation::YZX => {
                let s = -m[(0, 1)];
                let z = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(0.0, f64::atan2(-m[(2, 0)], m[(2, 2)]), z)
                } else {
                    let y = f64::atan2(m[(0, 2)], m[(0, 0)]);
                    let x = f64::atan2(m[(2, 1)], m[(1, 1)]);
                    EulerAngle::new(x, y, z)
                }
            }
            Permutation::ZXY => {
                let s = -m[(1, 2)];
                let x = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(x, 0.0, f64::atan2(-m[(0, 1)], m[(0, 0)]))
                } else {
                    let z = f64::atan2(m[(1, 0)], m[(1, 1)]);
                    let y = f64::atan2(m[(0, 2)], m[(2, 2)]);
                    EulerAngle::new(x, y, z)
                }
            }
            Permutation::ZYX => {
                let s = m[(0, 2)];
                let y = clamp_unit(s).asin();
                if gimbal(s) {
                    EulerAngle::new(0.0, y, f64::atan2(m[(1, 0)], m[(1, 1)]))
                } else {
                    let z = f64::atan2(-m[(0, 1)], m[(0, 0)]);
                    let x = f64::atan2(-m[(1, 2)], m[(2, 2)]);
                    EulerAngle::new(x, y, z)
                }
            }
        };

        Ok(euler)
    }

    /// Quaternion equivalent via Shepperd's method.
    ///
    /// Branches on the trace and the largest diagonal entry so that the
    /// divisor is always at least of order one.
    pub fn to_quaternion(&self) -> Quaternion {
        let m = &self.matrix;
        let trace = m.trace();

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion::new(
                0.25 * s,
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            )
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                0.25 * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                0.25 * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
            )
        } else {
            let s = (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt() * 2.0;
            Quaternion::new(
                (m[(1, 0)] - m[(0, 1)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                0.25 * s,
            )
        }
    }

    /// Axis and angle of the rotation, with the angle in `[0, π]`.
    ///
    /// Near the identity the axis is arbitrary and `(1, 0, 0)` is returned.
    ///
    /// # Errors
    /// [`MathError::ZeroLength`] if the recovered axis vanishes, which only
    /// happens for matrices that are not rotations.
    pub fn to_axis_angle(&self) -> MathResult<AxisAngle> {
        let m = &self.matrix;
        let cos_angle = clamp_unit((m.trace() - 1.0) / 2.0);
        let angle = cos_angle.acos();

        if angle.abs() < NEAR_IDENTITY_ANGLE {
            return Ok(AxisAngle::new(Vec3::unit_x(), angle));
        }

        let antisymmetric = Vec3::new(
            m[(2, 1)] - m[(1, 2)],
            m[(0, 2)] - m[(2, 0)],
            m[(1, 0)] - m[(0, 1)],
        );

        let axis = if PI - angle < NEAR_IDENTITY_ANGLE {
            trace!(angle, "axis recovered from symmetric part near pi");
            Self::symmetric_axis(m, cos_angle, &antisymmetric)
        } else {
            antisymmetric.scale(1.0 / (2.0 * angle.sin()))
        };

        Ok(AxisAngle::new(axis.normalize()?, angle))
    }

    /// Axis from `R + Rᵀ = 2cI + 2(1 − c) n nᵀ`, seeded by the largest diagonal entry.
    fn symmetric_axis(m: &Matrix3, cos_angle: f64, antisymmetric: &Vec3) -> Vec3 {
        let one_minus_cos = 1.0 - cos_angle;
        let k = (0..3).fold(0, |best, i| if m[(i, i)] > m[(best, best)] { i } else { best });

        let n_k = ((m[(k, k)] - cos_angle) / one_minus_cos).max(0.0).sqrt();
        if n_k == 0.0 {
            return Vec3::zero();
        }

        let mut n = [0.0; 3];
        for (j, n_j) in n.iter_mut().enumerate() {
            *n_j = if j == k {
                n_k
            } else {
                (m[(k, j)] + m[(j, k)]) / (2.0 * one_minus_cos * n_k)
            };
        }

        let axis = Vec3::from(n);
        // Both signs describe the same rotation at exactly π; otherwise follow sin(angle) > 0.
        if axis.dot(antisymmetric) < 0.0 {
            axis.reverse()
        } else {
            axis
        }
    }

    #[inline]
    pub fn rotate_vector(&self, v: &Vec3) -> Vec3 {
        self.matrix.mul_vec(v)
    }

    /// Rotate `v` about `center` instead of the origin.
    pub fn rotate_around_point(&self, v: &Vec3, center: &Vec3) -> Vec3 {
        self.rotate_vector(&(*v - *center)) + *center
    }

    /// Apply a reflection; the result is no longer tagged with an order.
    pub fn reflect(&self, reflection: Reflection) -> Self {
        let mut out = *self;
        out.reflect_mut(reflection);
        out
    }

    pub fn reflect_mut(&mut self, reflection: Reflection) {
        for &i in reflection.negated_diagonal() {
            self.matrix[(i, i)] = -self.matrix[(i, i)];
        }
        self.order = RotationOrder::Untagged;
    }

    /// Spherical interpolation through the quaternion equivalents.
    ///
    /// # Errors
    /// Same as [`Quaternion::slerp`].
    pub fn slerp(&self, target: &RotationMatrix, t: f64) -> MathResult<Self> {
        let q = self.to_quaternion().slerp(&target.to_quaternion(), t)?;
        Ok(q.to_rotation_matrix())
    }

    pub fn slerp_mut(&mut self, target: &RotationMatrix, t: f64) -> MathResult<()> {
        *self = self.slerp(target, t)?;
        Ok(())
    }

    pub(crate) fn quaternion_derived(matrix: Matrix3) -> Self {
        Self {
            matrix,
            order: RotationOrder::QuaternionDerived,
        }
    }
}

impl Rotation for RotationMatrix {
    fn to_quaternion(&self) -> MathResult<Quaternion> {
        Ok(RotationMatrix::to_quaternion(self))
    }

    fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        Ok(RotationMatrix::rotate_vector(self, v))
    }
}

/// Plain matrix product; the result carries no order tag.
impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix::from_matrix(self.matrix * rhs.matrix)
    }
}

impl Mul<Vec3> for RotationMatrix {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vector(&rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
