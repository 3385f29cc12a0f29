//! Fixed-dimension linear algebra: small vector and matrix value types.
//!
//! Everything here is a pure function over `Copy` types; nothing allocates.
//! Scalars are `f64` throughout, matching the depth precision used by the
//! rasterizer.

pub mod matrix;
pub mod vector;

pub use matrix::{Mat1, Mat2, Mat3, Mat4};
pub use vector::{Vec2, Vec3, Vec4};
