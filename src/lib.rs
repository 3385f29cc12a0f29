//! softgl - a software (CPU-only) triangle rasterization pipeline.
//!
//! Triangles with per-vertex attributes go in through a pluggable
//! [`Shader`] contract; colored pixels with correct depth ordering come
//! out the other end of a [`Framebuffer`]/[`DepthBuffer`] pair. A pass
//! looks like this:
//!
//! 1. build a [`RenderContext`] (`look_at`, `set_perspective`,
//!    `set_viewport`),
//! 2. for each triangle, run the shader's vertex stage three times to get
//!    clip-space positions,
//! 3. call [`rasterizer::rasterize`] (or let [`pipeline::render`] drive
//!    the whole model), which invokes the fragment stage once per covered,
//!    depth-passing pixel.
//!
//! Mesh and texture loading, image persistence and window output live
//! outside the crate; the [`model::Model`] trait is the boundary to them.

pub mod buffer;
pub mod geometry;
pub mod model;
pub mod pipeline;
pub mod rasterizer;
pub mod shader;
pub mod shaders;
pub mod transform;

pub use buffer::{Color, DepthBuffer, Framebuffer};
pub use geometry::{Mat3, Mat4, Vec2, Vec3, Vec4};
pub use model::Model;
pub use shader::Shader;
pub use transform::RenderContext;
