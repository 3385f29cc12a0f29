//! One render pass: assemble each face through the vertex stage, then
//! hand it to the rasterizer.

use log::debug;

use crate::buffer::{DepthBuffer, Framebuffer};
use crate::model::Model;
use crate::rasterizer::rasterize;
use crate::shader::Shader;
use crate::transform::RenderContext;

/// Draws every face of a model with the given shader.
///
/// A pass is CPU-bound and synchronous; it runs to completion with no
/// cancellation. Multi-pass techniques (shadow buffers, occlusion) are
/// composed by the caller: rebuild the context, swap the shader and the
/// buffers, call again. Triangles are processed strictly sequentially
/// because two of them may race on the same pixel's depth-then-color
/// update.
pub fn render<M: Model, S: Shader>(
    ctx: &RenderContext,
    model: &M,
    shader: &mut S,
    framebuffer: &mut Framebuffer,
    depth_buffer: &mut DepthBuffer,
) {
    for face in 0..model.face_count() {
        let clip_verts = [
            shader.vertex(face, 0),
            shader.vertex(face, 1),
            shader.vertex(face, 2),
        ];
        rasterize(ctx, clip_verts, &*shader, framebuffer, depth_buffer);
    }
    debug!(
        "pass complete: {} faces into {}x{}",
        model.face_count(),
        framebuffer.width(),
        framebuffer.height()
    );
}
