//! Interpolation behaviour of quaternions, rotation matrices and vectors

#![allow(clippy::unwrap_used)]

use spatial_rotations::{
    AxisAngle, MathError, Quaternion, RotationMatrix, RotationMatrix2, RotationOrder, Vec3,
};
use std::f64::consts::{FRAC_PI_2, PI};

mod rotation_test_utils;
use rotation_test_utils::*;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_slerp_boundaries() {
    for _ in 0..100 {
        let q1 = Quaternion::random();
        let q2 = Quaternion::random();

        assert!(q1.slerp(&q2, 0.0).unwrap().approx_eq(&q1, TOLERANCE));
        assert!(q1.slerp(&q2, 1.0).unwrap().approx_eq(&q2, TOLERANCE));
    }
}

#[test]
fn test_slerp_with_itself() {
    let q = Quaternion::random();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(q.slerp(&q, t).unwrap().approx_eq(&q, TOLERANCE));
    }
}

#[test]
fn test_slerp_shortest_path() {
    let q = AxisAngle::new(random_axis(), 1.0).to_quaternion().unwrap();
    let mid = q.slerp(&-q, 0.5).unwrap();

    // Not merely the same rotation: the very same components
    for (a, b) in mid.coords().iter().zip(q.coords()) {
        assert!((a - b).abs() < TOLERANCE, "expected {q}, got {mid}");
    }
}

#[test]
fn test_slerp_constant_angular_velocity() {
    let axis = random_axis();
    let q1 = AxisAngle::new(axis, 0.0).to_quaternion().unwrap();
    let q2 = AxisAngle::new(axis, 2.0).to_quaternion().unwrap();

    for i in 1..10 {
        let t = i as f64 / 10.0;
        let q = q1.slerp(&q2, t).unwrap();
        assert!((q.angle().unwrap() - 2.0 * t).abs() < TOLERANCE);
    }
}

#[test]
fn test_slerp_near_parallel_uses_unit_result() {
    let q1 = AxisAngle::about_x(0.001).to_quaternion().unwrap();
    let q2 = AxisAngle::about_x(0.002).to_quaternion().unwrap();
    let mid = q1.slerp(&q2, 0.5).unwrap();

    assert!((mid.magnitude() - 1.0).abs() < 1e-12);
    assert!((mid.angle().unwrap() - 0.0015).abs() < 1e-6);
}

#[test]
fn test_interpolation_parameter_guard() {
    let q1 = Quaternion::identity();
    let q2 = AxisAngle::about_y(0.5).to_quaternion().unwrap();

    for t in [1.5, -0.1] {
        assert_eq!(q1.slerp(&q2, t), Err(MathError::InvalidInterpolationParameter));
        assert_eq!(q1.lerp(&q2, t), Err(MathError::InvalidInterpolationParameter));
    }
}

#[test]
fn test_slerp_mut_is_atomic() {
    let mut q = AxisAngle::about_z(0.3).to_quaternion().unwrap();
    let original = q;

    assert!(q.slerp_mut(&Quaternion::zero(), 0.5).is_err());
    assert!(q.is_equal(&original));

    q.slerp_mut(&Quaternion::identity(), 1.0).unwrap();
    assert!(q.approx_eq(&Quaternion::identity(), TOLERANCE));
}

#[test]
fn test_matrix_slerp() {
    let a = RotationMatrix::about_x(0.2);
    let b = RotationMatrix::about_x(1.4);
    let mid = a.slerp(&b, 0.25).unwrap();

    assert_eq!(mid.order(), RotationOrder::QuaternionDerived);
    assert!(mid.matrix().approx_eq(RotationMatrix::about_x(0.5).matrix(), TOLERANCE));
}

#[test]
fn test_vector_slerp_quarter_circle() {
    let from = Vec3::new(2.0, 0.0, 0.0);
    let to = Vec3::new(0.0, 0.0, 3.0);
    let mid = from.slerp(&to, 0.5).unwrap();

    let s = FRAC_PI_2 / 2.0;
    assert!(mid.approx_eq(&Vec3::new(s.cos(), 0.0, s.sin()), TOLERANCE));
}

#[test]
fn test_planar_slerp() {
    let a = RotationMatrix2::from_angle(0.0);
    let b = RotationMatrix2::from_angle(PI / 2.0);
    let mid = a.slerp(&b, 0.5).unwrap();
    assert!((mid.angle() - PI / 4.0).abs() < TOLERANCE);
}
