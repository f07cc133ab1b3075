//! Plain linear-algebra primitives consumed by the rotation representations.
//!
//! - [`Vec2`], [`Vec3`]: vectors with arithmetic, normalization and interpolation
//! - [`Matrix2`], [`Matrix3`]: square matrices with determinant, adjugate and inverse
//!
//! All four are thin `Copy` wrappers around nalgebra's fixed-size types.

pub mod matrix2;
pub mod matrix3;
pub mod vec2;
pub mod vec3;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use vec2::Vec2;
pub use vec3::Vec3;
