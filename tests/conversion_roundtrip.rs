//! Round-trip conversions between every pair of rotation representations
//!
//! Each test samples random rotations and checks that converting through the
//! hub formats (quaternion, rotation matrix) lands back on the same rotation.

#![allow(clippy::unwrap_used)]

use spatial_rotations::{
    AxisAngle, EulerAngle, Permutation, Quaternion, RotationMatrix, RotationOrder, Vec3,
};
use std::f64::consts::{FRAC_PI_2, PI};

mod rotation_test_utils;
use rotation_test_utils::*;

const TOLERANCE: f64 = 1e-9;
const SAMPLES: usize = 200;

#[test]
fn test_quaternion_matrix_quaternion() {
    for _ in 0..SAMPLES {
        let q = Quaternion::random();
        let back = q.to_rotation_matrix().to_quaternion();
        assert!(back.approx_eq(&q, TOLERANCE), "{q} came back as {back}");
    }
}

#[test]
fn test_matrix_quaternion_matrix() {
    for _ in 0..SAMPLES {
        let r = RotationMatrix::random();
        let back = r.to_quaternion().to_rotation_matrix();
        assert!(back.matrix().approx_eq(r.matrix(), TOLERANCE));
    }
}

#[test]
fn test_from_order_xyz_recovers_angles() {
    for _ in 0..SAMPLES {
        let e = random_euler_away_from_gimbal(0.05);
        let r = RotationMatrix::from_order("XYZ", e.roll, e.pitch, e.yaw).unwrap();
        let back = r.to_euler_angles().unwrap();

        assert!(
            (back.roll - e.roll).abs() < 1e-6
                && (back.pitch - e.pitch).abs() < 1e-6
                && (back.yaw - e.yaw).abs() < 1e-6,
            "{e} came back as {back}"
        );
    }
}

#[test]
fn test_euler_quaternion_euler() {
    for _ in 0..SAMPLES {
        let e = random_euler_away_from_gimbal(0.05);
        let back = e.to_quaternion().to_euler_angles();
        assert!((back.roll - e.roll).abs() < 1e-6);
        assert!((back.pitch - e.pitch).abs() < 1e-6);
        assert!((back.yaw - e.yaw).abs() < 1e-6);
    }
}

#[test]
fn test_euler_routes_agree() {
    // Direct closed form and the route through the XYZ matrix describe the same rotation
    for _ in 0..SAMPLES {
        let e = random_euler_away_from_gimbal(0.0);
        let direct = e.to_quaternion();
        let via_matrix = e.to_rotation_matrix("XYZ").unwrap().to_quaternion();
        assert!(direct.approx_eq(&via_matrix, TOLERANCE));
    }
}

#[test]
fn test_axis_angle_quaternion_axis_angle() {
    for _ in 0..SAMPLES {
        let axis = random_axis().normalize().unwrap();
        let angle = rand::random::<f64>() * (PI - 0.01) + 0.01;

        let aa = AxisAngle::new(axis, angle);
        let back = aa.to_quaternion().unwrap().to_axis_angle().unwrap();

        assert!((back.angle - angle).abs() < TOLERANCE);
        assert!(back.axis.approx_eq(&axis, 1e-8), "{aa} came back as {back}");
    }
}

#[test]
fn test_axis_angle_matrix_axis_angle() {
    for _ in 0..SAMPLES {
        let axis = random_axis().normalize().unwrap();
        let angle = rand::random::<f64>() * (PI - 0.01) + 0.01;

        let aa = AxisAngle::new(axis, angle);
        let back = aa.to_rotation_matrix().unwrap().to_axis_angle().unwrap();

        assert!((back.angle - angle).abs() < 1e-8);
        assert!(back.axis.approx_eq(&axis, 1e-7), "{aa} came back as {back}");
    }
}

#[test]
fn test_axis_angle_euler_axis_angle() {
    let aa = AxisAngle::try_new(Vec3::new(1.0, 2.0, 3.0), 0.6).unwrap();
    let e = aa.to_euler_angles().unwrap();
    let back = e.to_axis_angle("XYZ").unwrap();

    assert!((back.angle - aa.angle).abs() < TOLERANCE);
    assert!(back.axis.approx_eq(&aa.axis, TOLERANCE));
}

#[test]
fn test_every_representation_rotates_alike() {
    let v = Vec3::new(0.3, -1.2, 2.0);

    for _ in 0..50 {
        let e = random_euler_away_from_gimbal(0.05);
        let q = e.to_quaternion();
        let r = e.to_rotation_matrix_with(Permutation::XYZ);
        let aa = q.to_axis_angle().unwrap();

        let expected = r.rotate_vector(&v);
        for rotated in [
            v.rotate_by(&e).unwrap(),
            v.rotate_by(&q).unwrap(),
            v.rotate_by(&r).unwrap(),
            v.rotate_by(&aa).unwrap(),
        ] {
            assert!(rotated.approx_eq(&expected, TOLERANCE), "{rotated} vs {expected}");
        }
    }
}

#[test]
fn test_quarter_turn_about_z() {
    let aa = AxisAngle::new(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
    let rotated = aa.rotate_vector(&Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!(rotated.approx_eq(&Vec3::new(0.0, 1.0, 0.0), TOLERANCE));
}

#[test]
fn test_half_turn_about_z_quaternion() {
    let q = AxisAngle::new(Vec3::new(0.0, 0.0, 1.0), PI)
        .to_quaternion()
        .unwrap();
    assert!(q.approx_eq(&Quaternion::new(0.0, 0.0, 0.0, 1.0), TOLERANCE));
}

#[test]
fn test_gimbal_lock_xyz_has_no_nan() {
    let r = RotationMatrix::from_order("XYZ", 0.4, FRAC_PI_2, 0.9).unwrap();
    let e = r.to_euler_angles().unwrap();

    assert!(!e.roll.is_nan() && !e.pitch.is_nan() && !e.yaw.is_nan());
    assert_eq!(e.yaw, 0.0);
    assert!((e.pitch - FRAC_PI_2).abs() < 1e-6);

    let rebuilt = EulerAngle::new(e.roll, e.pitch, e.yaw)
        .to_rotation_matrix("XYZ")
        .unwrap();
    assert!(rebuilt.matrix().approx_eq(r.matrix(), 1e-6));
}

#[test]
fn test_incremental_composition_supports_euler() {
    let mut r = RotationMatrix::identity();
    r.compose_single_axis(&RotationMatrix::about_z(0.5)).unwrap();
    r.compose_single_axis(&RotationMatrix::about_y(-0.3)).unwrap();
    r.compose_single_axis(&RotationMatrix::about_x(1.1)).unwrap();

    assert_eq!(r.order(), RotationOrder::Composed(Permutation::ZYX));
    let e = r.to_euler_angles().unwrap();
    assert!((e.roll - 1.1).abs() < TOLERANCE);
    assert!((e.pitch + 0.3).abs() < TOLERANCE);
    assert!((e.yaw - 0.5).abs() < TOLERANCE);
}
