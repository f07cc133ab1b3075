//! # Spatial Rotations
//!
//! Rotation representations for 3D (and 2D) geometry with mutually consistent
//! conversions and interpolation.
//!
//! ## Features
//!
//! - **Four 3D representations**: [`Quaternion`], [`RotationMatrix`], [`AxisAngle`], [`EulerAngle`]
//! - **Any-to-any conversion**: routed through the quaternion or the rotation matrix
//! - **All six Euler orders**: extraction with explicit gimbal-lock handling
//! - **Interpolation**: quaternion Slerp/Lerp, matrix Slerp, vector Slerp, planar angle Slerp
//! - **Explicit errors**: every degenerate input is reported through [`MathError`]
//!
//! ## Conventions
//!
//! Rotations are active and right-handed. `roll`, `pitch` and `yaw` are the
//! angles about X, Y and Z. An order string `"ABC"` applies A first, so
//! `"XYZ"` means `R = Rz(yaw) · Ry(pitch) · Rx(roll)`, the convention used by
//! [`EulerAngle::to_quaternion`] and [`Quaternion::to_euler_angles`].
//!
//! ## Example
//!
//! ```
//! use spatial_rotations::{EulerAngle, Quaternion, Vec3};
//!
//! let e = EulerAngle::new(0.1, 0.2, 0.3);
//! let q = e.to_quaternion();
//! let m = q.to_rotation_matrix();
//! assert!(m.to_quaternion().approx_eq(&q, 1e-12));
//!
//! let v = q.rotate_vector(&Vec3::new(1.0, 0.0, 0.0)).unwrap();
//! assert!((v.length() - 1.0).abs() < 1e-12);
//! ```

pub mod angle;
pub mod error;
pub mod logger;
pub mod primitives;
pub mod rotation;

// Re-export error types
pub use error::{Degenerate, MathError, MathResult};

// Re-export logger
pub use logger::{init_logger, init_logger_with_level};

// Re-export primitives
pub use primitives::{Matrix2, Matrix3, Vec2, Vec3};

// Re-export rotation types
pub use rotation::{
    Axis, AxisAngle, EulerAngle, Permutation, Quaternion, Reflection, Reflection2, Rotation,
    RotationMatrix, RotationMatrix2, RotationOrder,
};
