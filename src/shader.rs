//! The programmable stage contract between a client and the rasterizer.

use crate::buffer::Color;
use crate::geometry::{Vec3, Vec4};

/// A shading program for one draw: a vertex stage and a fragment stage.
///
/// The driver calls [`vertex`](Shader::vertex) three times per triangle to
/// obtain clip-space positions; the shader records whatever per-vertex
/// varyings (UV, normal, eye-space position) its fragment stage will need,
/// keyed by the vertex slot 0..3. Per-draw uniforms (a transformed light
/// direction, material constants) are set up at construction time.
///
/// The rasterizer then calls [`fragment`](Shader::fragment) once per
/// covered, depth-passing pixel with **perspective-corrected** barycentric
/// weights. Returning `None` discards the fragment: neither the color nor
/// the depth of that pixel is written. Resolved statically via generics so
/// the per-pixel call can inline.
pub trait Shader {
    /// Computes the clip-space position of one triangle corner and stores
    /// its varying attributes in the shader instance.
    fn vertex(&mut self, face: usize, vert: usize) -> Vec4;

    /// Computes the color of one fragment from the interpolation weights,
    /// or `None` to discard it (alpha-test style cutouts).
    fn fragment(&self, bar: Vec3) -> Option<Color>;
}
