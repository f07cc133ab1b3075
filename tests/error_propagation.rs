//! Error reporting through the public API
//!
//! Every degenerate input must surface as a `MathError` (or a `Degenerate`
//! value for the two best-effort conversions) without mutating the receiver.

#![allow(clippy::unwrap_used)]

use spatial_rotations::{
    AxisAngle, Degenerate, EulerAngle, MathError, MathResult, Matrix3, Quaternion,
    RotationMatrix, Vec3,
};

#[test]
fn test_zero_quaternion_normalize() {
    let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(q.normalize_mut(), Err(MathError::ZeroMagnitude));
    assert_eq!(q.coords(), [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_zero_vector_normalize() {
    let mut v = Vec3::zero();
    assert_eq!(v.normalize_mut(), Err(MathError::ZeroLength));
    assert!(v.is_equal(&Vec3::zero()));
}

#[test]
fn test_singular_matrix_inverse() {
    let singular = Matrix3::from_rows([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [7.0, 8.0, 9.0]]);
    assert_eq!(singular.inverse(), Err(MathError::ZeroDeterminant));
}

#[test]
fn test_invalid_orders() {
    let e = EulerAngle::new(0.1, 0.2, 0.3);
    for order in ["XY", "XYZZ", "XXY", "ABC", "X Y"] {
        assert_eq!(
            e.to_rotation_matrix(order),
            Err(MathError::InvalidRotationOrder),
            "order {order:?}"
        );
    }
    assert_eq!(
        RotationMatrix::from_matrix(Matrix3::identity()).to_euler_angles(),
        Err(MathError::UnsupportedRotationOrder)
    );
}

#[test]
fn test_insignificant_angle_is_two_channel() {
    let result = Quaternion::identity().to_axis_angle();
    let err = result.unwrap_err();

    // The soft condition still carries a usable value
    assert!(err.is_soft());
    assert_eq!(*err.value(), AxisAngle::identity());

    // ...and `?` escalates it into a hard error
    fn escalate(q: &Quaternion) -> MathResult<AxisAngle> {
        Ok(q.to_axis_angle()?)
    }
    assert_eq!(
        escalate(&Quaternion::identity()),
        Err(MathError::InsignificantAngle)
    );
}

#[test]
fn test_zero_axis_matrix_is_identity_plus_error() {
    let err: Degenerate<RotationMatrix> = AxisAngle::new(Vec3::zero(), 1.0)
        .to_rotation_matrix()
        .unwrap_err();

    assert_eq!(err.error(), MathError::ZeroLength);
    assert!(err.into_inner().matrix().is_identity());
}

#[test]
fn test_composite_errors_propagate_first_failure() {
    let zero_axis = AxisAngle::new(Vec3::zero(), 0.5);
    assert_eq!(zero_axis.to_euler_angles(), Err(MathError::ZeroLength));
    assert_eq!(zero_axis.to_quaternion(), Err(MathError::ZeroLength));

    // Parameter validation runs before operand normalization
    assert_eq!(
        Quaternion::zero().slerp(&Quaternion::zero(), 2.0),
        Err(MathError::InvalidInterpolationParameter)
    );
    assert_eq!(
        Quaternion::zero().slerp(&Quaternion::identity(), 0.5),
        Err(MathError::NormalizeFailed)
    );
}

#[test]
fn test_composition_misuse() {
    let mut r = RotationMatrix::about_y(0.1);
    let before = r;

    assert_eq!(
        r.compose_single_axis(&RotationMatrix::about_y(0.3)),
        Err(MathError::DuplicateAxis)
    );
    assert_eq!(
        r.compose_single_axis(&RotationMatrix::from_order("XYZ", 0.0, 0.0, 0.0).unwrap()),
        Err(MathError::InvalidAxisRotation)
    );
    assert_eq!(r, before);

    let mut full = RotationMatrix::from_order("YZX", 0.1, 0.2, 0.3).unwrap();
    assert_eq!(
        full.compose_single_axis(&RotationMatrix::about_z(0.1)),
        Err(MathError::TooManyAxes)
    );
}

#[test]
fn test_errors_display() {
    assert_eq!(MathError::ZeroMagnitude.to_string(), "Magnitude is zero");
    let err = Quaternion::zero().to_axis_angle().unwrap_err();
    assert_eq!(err.to_string(), "Magnitude is zero");
}
