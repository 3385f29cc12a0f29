//! The mesh/material provider contract.
//!
//! Loading geometry and textures from disk is someone else's job; the core
//! only ever reaches a `Model` from inside a client shader's vertex and
//! fragment stages. A provider that failed to load a texture reports that
//! at load time and simply serves default data here.

use image::RgbImage;

use crate::buffer::Color;
use crate::geometry::{Vec2, Vec3};

/// Triangle mesh with per-corner attributes and material samplers.
pub trait Model {
    fn vertex_count(&self) -> usize;
    fn face_count(&self) -> usize;

    /// Object-space position of one triangle corner (vert in 0..3).
    fn vertex(&self, face: usize, vert: usize) -> Vec3;

    /// Texture coordinate of one triangle corner.
    fn uv(&self, face: usize, vert: usize) -> Vec2;

    /// Object-space normal of one triangle corner.
    fn normal(&self, face: usize, vert: usize) -> Vec3;

    /// Diffuse texture sample.
    fn diffuse(&self, uv: Vec2) -> Color;

    /// Specular exponent sample.
    fn specular(&self, uv: Vec2) -> f64;

    /// Tangent-space normal map sample.
    fn normal_map(&self, uv: Vec2) -> Vec3;
}

/// Nearest-neighbour texture lookup for `Model` implementations backed by
/// `image` bitmaps. UVs outside [0, 1) wrap.
pub fn sample(texture: &RgbImage, uv: Vec2) -> Color {
    let x = ((uv.x * texture.width() as f64).floor() as i64).rem_euclid(texture.width() as i64);
    let y = ((uv.y * texture.height() as f64).floor() as i64).rem_euclid(texture.height() as i64);
    let pixel = texture.get_pixel(x as u32, y as u32).0;
    return Color::new(pixel[0], pixel[1], pixel[2]);
}
