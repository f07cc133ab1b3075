//! Roll/pitch/yaw triple with the composition order supplied per conversion.

use crate::angle::{normalize_angle, normalize_angle_two_pi, to_degrees, to_radians};
use crate::error::MathResult;
use crate::primitives::Vec3;
use crate::rotation::{AxisAngle, Permutation, Quaternion, Rotation, RotationMatrix};
use std::fmt;

/// Rotation angles about X (`roll`), Y (`pitch`) and Z (`yaw`), in radians.
///
/// The value does not record an order. Conversions that need one take it as
/// an argument; [`EulerAngle::to_quaternion`] uses `"XYZ"`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngle {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl fmt::Display for EulerAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerAngle(roll: {:.4}, pitch: {:.4}, yaw: {:.4})",
            self.roll, self.pitch, self.yaw
        )
    }
}

impl EulerAngle {
    #[inline]
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(to_radians(roll), to_radians(pitch), to_radians(yaw))
    }

    pub fn set(&mut self, roll: f64, pitch: f64, yaw: f64) {
        *self = Self::new(roll, pitch, yaw);
    }

    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    /// Closed-form quaternion of `Rz(yaw) · Ry(pitch) · Rx(roll)`.
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_euler_angles(self)
    }

    /// # Errors
    /// [`MathError::InvalidRotationOrder`](crate::MathError::InvalidRotationOrder)
    /// unless `order` is a permutation of `X`, `Y`, `Z`.
    pub fn to_rotation_matrix(&self, order: &str) -> MathResult<RotationMatrix> {
        RotationMatrix::from_order(order, self.roll, self.pitch, self.yaw)
    }

    pub fn to_rotation_matrix_with(&self, permutation: Permutation) -> RotationMatrix {
        RotationMatrix::from_permutation(permutation, self.roll, self.pitch, self.yaw)
    }

    pub fn to_axis_angle(&self, order: &str) -> MathResult<AxisAngle> {
        self.to_rotation_matrix(order)?.to_axis_angle()
    }

    /// Each angle wrapped into `[-π, π]`.
    pub fn normalize_to_pi(&self) -> Self {
        Self::new(
            normalize_angle(self.roll),
            normalize_angle(self.pitch),
            normalize_angle(self.yaw),
        )
    }

    pub fn normalize_to_pi_mut(&mut self) {
        *self = self.normalize_to_pi();
    }

    /// Each angle wrapped into `[0, 2π)`.
    pub fn normalize_to_two_pi(&self) -> Self {
        Self::new(
            normalize_angle_two_pi(self.roll),
            normalize_angle_two_pi(self.pitch),
            normalize_angle_two_pi(self.yaw),
        )
    }

    pub fn normalize_to_two_pi_mut(&mut self) {
        *self = self.normalize_to_two_pi();
    }

    /// Copy with every field converted from radians to degrees.
    pub fn to_degrees(&self) -> Self {
        Self::new(to_degrees(self.roll), to_degrees(self.pitch), to_degrees(self.yaw))
    }

    /// Copy with every field converted from degrees to radians.
    pub fn to_radians(&self) -> Self {
        Self::new(to_radians(self.roll), to_radians(self.pitch), to_radians(self.yaw))
    }

    pub fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        self.to_quaternion().rotate_vector(v)
    }
}

impl Rotation for EulerAngle {
    fn to_quaternion(&self) -> MathResult<Quaternion> {
        Ok(EulerAngle::to_quaternion(self))
    }

    fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3> {
        EulerAngle::rotate_vector(self, v)
    }
}
