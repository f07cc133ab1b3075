//! Rotation representations and the conversions between them.
//!
//! Representation | Storage               | Constraint            | Composition        | Action
//! -------------- | --------------------- | --------------------- | ------------------ | -----------
//! Quaternion     | (w, x, y, z)          | ‖q‖ = 1 for rotation  | q₁q₂ (Hamilton)    | q v q⁻¹
//! RotationMatrix | 3×3 + axis order tag  | RᵀR = I, det R = 1    | R₁R₂               | R v
//! AxisAngle      | (axis, angle)         | axis ≠ 0              | via quaternion     | Rodrigues
//! EulerAngle     | (roll, pitch, yaw)    | order given per call  | via matrix         | via quaternion
//!
//! Any representation converts to any other by routing through
//! [`Quaternion`] or [`RotationMatrix`].
//!
//! # Conventions
//!
//! - Right-handed, active rotations; positive angles turn counter-clockwise when
//!   looking down the axis towards the origin.
//! - `roll` is the angle about X, `pitch` about Y, `yaw` about Z, whatever the order.
//! - An order string `"ABC"` applies A first: `R = R_C · R_B · R_A`. The default
//!   convention used by [`EulerAngle::to_quaternion`] and
//!   [`Quaternion::to_euler_angles`] is `"XYZ"`, i.e. `R = Rz(yaw) · Ry(pitch) · Rx(roll)`.

use crate::error::{MathError, MathResult};
use crate::primitives::Vec3;
use std::fmt;
use std::str::FromStr;

pub mod axis_angle;
pub mod euler_angle;
pub mod quaternion;
pub mod rotation2d;
pub mod rotation_matrix;

pub use axis_angle::AxisAngle;
pub use euler_angle::EulerAngle;
pub use quaternion::Quaternion;
pub use rotation2d::{Reflection2, RotationMatrix2};
pub use rotation_matrix::RotationMatrix;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse a single axis letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Unit vector along this axis.
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::unit_x(),
            Axis::Y => Vec3::unit_y(),
            Axis::Z => Vec3::unit_z(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the six orders in which three elemental rotations can be applied.
///
/// The first letter is applied first.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permutation {
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
}

impl Permutation {
    pub const ALL: [Permutation; 6] = [
        Permutation::XYZ,
        Permutation::XZY,
        Permutation::YXZ,
        Permutation::YZX,
        Permutation::ZXY,
        Permutation::ZYX,
    ];

    /// Axes in application order.
    pub fn axes(&self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            Permutation::XYZ => [X, Y, Z],
            Permutation::XZY => [X, Z, Y],
            Permutation::YXZ => [Y, X, Z],
            Permutation::YZX => [Y, Z, X],
            Permutation::ZXY => [Z, X, Y],
            Permutation::ZYX => [Z, Y, X],
        }
    }

    /// Build from three axes; fails unless each axis appears exactly once.
    pub fn from_axes(axes: [Axis; 3]) -> MathResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.axes() == axes)
            .ok_or(MathError::InvalidRotationOrder)
    }
}

impl FromStr for Permutation {
    type Err = MathError;

    /// Parse an order string such as `"xyz"` or `"ZYX"` (case-insensitive).
    fn from_str(order: &str) -> MathResult<Self> {
        let mut axes = [Axis::X; 3];
        let mut count = 0;

        for c in order.chars() {
            if count == 3 {
                return Err(MathError::InvalidRotationOrder);
            }
            axes[count] = Axis::from_char(c).ok_or(MathError::InvalidRotationOrder)?;
            count += 1;
        }

        if count != 3 {
            return Err(MathError::InvalidRotationOrder);
        }

        Permutation::from_axes(axes)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.axes();
        write!(f, "{a}{b}{c}")
    }
}

/// How a [`RotationMatrix`] was composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationOrder {
    /// Identity or a matrix of unknown provenance.
    Untagged,
    /// A single elemental rotation.
    Single(Axis),
    /// Two elemental rotations, first applied first.
    Pair(Axis, Axis),
    /// Three elemental rotations about distinct axes.
    Composed(Permutation),
    /// Converted from a quaternion; no elemental order applies.
    QuaternionDerived,
}

impl RotationOrder {
    /// Number of elemental axes composed so far, or `None` for quaternion-derived matrices.
    pub fn axis_count(&self) -> Option<usize> {
        match self {
            RotationOrder::Untagged => Some(0),
            RotationOrder::Single(_) => Some(1),
            RotationOrder::Pair(..) => Some(2),
            RotationOrder::Composed(_) => Some(3),
            RotationOrder::QuaternionDerived => None,
        }
    }

    /// Whether `axis` already takes part in the composition.
    pub fn contains(&self, axis: Axis) -> bool {
        match self {
            RotationOrder::Single(a) => *a == axis,
            RotationOrder::Pair(a, b) => *a == axis || *b == axis,
            RotationOrder::Composed(p) => p.axes().contains(&axis),
            RotationOrder::Untagged | RotationOrder::QuaternionDerived => false,
        }
    }

    /// The full permutation, if three axes have been composed.
    pub fn permutation(&self) -> Option<Permutation> {
        match self {
            RotationOrder::Composed(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationOrder::Untagged => write!(f, ""),
            RotationOrder::Single(a) => write!(f, "{a}"),
            RotationOrder::Pair(a, b) => write!(f, "{a}{b}"),
            RotationOrder::Composed(p) => write!(f, "{p}"),
            RotationOrder::QuaternionDerived => write!(f, "quaternion"),
        }
    }
}

/// Reflection applied to a 3D rotation matrix, named by the axis or plane kept.
///
/// `X`/`Y`/`Z` keep the named axis and negate the two orthogonal diagonal
/// entries; `XY`/`YZ`/`XZ` keep the named plane and negate the remaining one.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reflection {
    X,
    Y,
    Z,
    XY,
    YZ,
    XZ,
}

impl Reflection {
    /// Diagonal indices negated by this reflection.
    pub(crate) fn negated_diagonal(&self) -> &'static [usize] {
        match self {
            Reflection::X => &[1, 2],
            Reflection::Y => &[0, 2],
            Reflection::Z => &[0, 1],
            Reflection::XY => &[2],
            Reflection::YZ => &[0],
            Reflection::XZ => &[1],
        }
    }
}

/// Common interface of the 3D rotation representations.
///
/// Lets generic code (for instance [`Vec3::rotate_by`]) rotate vectors with any
/// representation, each using its own rotation operator.
pub trait Rotation {
    /// Equivalent unit quaternion.
    fn to_quaternion(&self) -> MathResult<Quaternion>;

    /// Apply the rotation to a vector.
    fn rotate_vector(&self, v: &Vec3) -> MathResult<Vec3>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_parse_case_insensitive() {
        assert_eq!("xyz".parse::<Permutation>(), Ok(Permutation::XYZ));
        assert_eq!("ZyX".parse::<Permutation>(), Ok(Permutation::ZYX));
        assert_eq!("YZX".parse::<Permutation>(), Ok(Permutation::YZX));
    }

    #[test]
    fn test_permutation_parse_rejects_invalid() {
        for bad in ["", "XY", "XYZX", "XXY", "ABC", "XY1", "zzz"] {
            assert_eq!(
                bad.parse::<Permutation>(),
                Err(MathError::InvalidRotationOrder),
                "order {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_permutation_display_roundtrip() {
        for p in Permutation::ALL {
            assert_eq!(p.to_string().parse::<Permutation>(), Ok(p));
        }
    }

    #[test]
    fn test_rotation_order_axes() {
        assert_eq!(RotationOrder::Untagged.axis_count(), Some(0));
        assert_eq!(RotationOrder::Pair(Axis::Z, Axis::X).axis_count(), Some(2));
        assert_eq!(RotationOrder::QuaternionDerived.axis_count(), None);
        assert!(RotationOrder::Pair(Axis::Z, Axis::X).contains(Axis::X));
        assert!(!RotationOrder::Single(Axis::Z).contains(Axis::Y));
        assert_eq!(
            RotationOrder::Composed(Permutation::YXZ).permutation(),
            Some(Permutation::YXZ)
        );
        assert_eq!(RotationOrder::Single(Axis::Y).permutation(), None);
    }

    #[test]
    fn test_axis_letters() {
        assert_eq!(Axis::from_char('y'), Some(Axis::Y));
        assert_eq!(Axis::from_char('w'), None);
        assert!(Axis::Z.unit().is_equal(&Vec3::unit_z()));
    }
}
