//! Axis-angle rotation representation.

use crate::error::{Degenerate, MathResult};
use crate::primitives::vec3::rotate_about_unit_axis;
use crate::primitives::{Matrix3, Vec3};
use crate::rotation::{EulerAngle, Permutation, Quaternion, Rotation, RotationMatrix};
use std::fmt;

/// Rotation by `angle` radians about `axis`.
///
/// The axis is not required to be unit length; every conversion normalizes
/// a copy and fails with [`crate::MathError::ZeroLength`] if the axis is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f64,
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AxisAngle(axis: [{:.4}, {:.4}, {:.4}], angle: {:.4})",
            self.axis.x(),
            self.axis.y(),
            self.axis.z(),
            self.angle
        )
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisAngle {
    #[inline]
    pub fn new(axis: Vec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Like [`AxisAngle::new`] but stores the normalized axis.
    pub fn try_new(axis: Vec3, angle: f64) -> MathResult<Self> {
        Ok(Self::new(axis.normalize()?, angle))
    }

    /// Zero rotation about `(1, 0, 0)`.
    pub fn identity() -> Self {
        Self::new(Vec3::unit_x(), 0.0)
    }

    pub fn about_x(angle: f64) -> Self {
        Self::new(Vec3::unit_x(), angle)
    }

    pub fn about_y(angle: f64) -> Self {
        Self::new(Vec3::unit_y(), angle)
    }

    pub fn about_z(angle: f64) -> Self {
        Self::new(Vec3::unit_z(), angle)
    }

    pub fn set(&mut self, axis: Vec3, angle: f64) {
        self.axis = axis;
        self.angle = angle;
    }

    pub fn set_axis(&mut self, axis: Vec3) {
        self.axis = axis;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Assign from a quaternion.
    ///
    /// Any error from [`Quaternion::to_axis_angle`], including the soft
    /// [`crate::MathError::InsignificantAngle`], leaves `self` unchanged.
    pub fn set_from_quaternion(&mut self, q: &Quaternion) -> MathResult<()> {
        *self = q.to_axis_angle()?;
        Ok(())
    }

    pub fn set_from_rotation_matrix(&mut self, matrix: &RotationMatrix) -> MathResult<()> {
        *self = matrix.to_axis_angle()?;
        Ok(())
    }

    /// Assign from Euler angles composed in `order`.
    pub fn set_from_euler_angles(&mut self, euler: &EulerAngle, order: &str) -> MathResult<()> {
        *self = euler.to_axis_angle(order)?;
        Ok(())
    }

    /// `w = cos(θ/2)`, `(x, y, z) = axis · sin(θ/2)`.
    pub fn to_quaternion(&self) -> MathResult<Quaternion> {
        let axis = self.axis.normalize()?;
        let (sin_half, cos_half) = (self.angle * 0.5).sin_cos();

        Ok(Quaternion::new(
            cos_half,
            axis.x() * sin_half,
            axis.y() * sin_half,
            axis.z() * sin_half,
        ))
    }

    /// Rotation matrix by Rodrigues' formula `R = cI + s[k]× + (1 − c)kkᵀ`.
    ///
    /// The result is untagged.
    ///
    /// # Errors
    /// A [`Degenerate`] carrying the identity matrix and
    /// [`crate::MathError::ZeroLength`] if the axis is zero.
    pub fn to_rotation_matrix(&self) -> Result<RotationMatrix, Degenerate<RotationMatrix>> {
        let k = self
            .axis
            .normalize()
            .map_err(|e| Degenerate::new(RotationMatrix::identity(), e))?;

        let (s, c) = self.angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (k.x(), k.y(), k.z());

        Ok(RotationMatrix::from_matrix(Matrix3::from_rows([
            [c + t * x * x, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, c + t * y * y, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, c + t * z * z],
        ])))
    }

    /// Euler angles in the `"XYZ"` convention shared with [`EulerAngle::to_quaternion`].
    pub fn to_euler_angles(&self) -> MathResult<EulerAngle> {
        self.to_euler_angles_in(Permutation::XYZ)
    }

    /// Euler angles for an arbitrary composition order.
    pub fn to_euler_angles_in(&self, permutation: Permutation) -> MathResult<EulerAngle> {
        self.to_rotation_matrix()?
            .assume_order(permutation)
            .to_euler_angles()
    }

    /// Rotate `v` with the vector form of Rodrigues' formula.
    pub fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        let axis = self.axis.normalize()?;
        Ok(rotate_about_unit_axis(v, &axis, self.angle))
    }
}

impl Rotation for AxisAngle {
    fn to_quaternion(&self) -> MathResult<Quaternion> {
        AxisAngle::to_quaternion(self)
    }

    fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        AxisAngle::rotate_vector(self, v)
    }
}

impl From<Degenerate<AxisAngle>> for AxisAngle {
    /// Accept the best-effort value, ignoring the error.
    fn from(degenerate: Degenerate<AxisAngle>) -> Self {
        degenerate.into_inner()
    }
}
