//! Example shading programs built on the [`Shader`](crate::Shader)
//! contract. These are clients of the pipeline, kept here as reference
//! implementations; anything a renderer actually ships tends to start as a
//! copy of one of them.

use crate::buffer::Color;
use crate::geometry::{Mat4, Vec2, Vec3, Vec4};
use crate::model::Model;
use crate::shader::Shader;
use crate::transform::RenderContext;

/// Ambient floor so unlit faces stay visible.
const AMBIENT: f64 = 30.0;

/// Per-face diffuse lighting from the eye-space triangle normal.
pub struct FlatShader<'a, M: Model> {
    ctx: &'a RenderContext,
    model: &'a M,
    /// Light direction in eye coordinates.
    uniform_light: Vec3,
    /// Eye-space corner positions of the current triangle.
    tri_eye: [Vec3; 3],
}

impl<'a, M: Model> FlatShader<'a, M> {
    /// `light` is the world-space direction toward the light source.
    pub fn new(ctx: &'a RenderContext, model: &'a M, light: Vec3) -> FlatShader<'a, M> {
        return FlatShader {
            ctx,
            model,
            uniform_light: (ctx.modelview * light.extend(0.0)).xyz().normalized(),
            tri_eye: [Vec3::default(); 3],
        };
    }
}

impl<'a, M: Model> Shader for FlatShader<'a, M> {
    fn vertex(&mut self, face: usize, vert: usize) -> Vec4 {
        let position = self.model.vertex(face, vert).extend(1.0);
        let eye_position = self.ctx.modelview * position;
        self.tri_eye[vert] = eye_position.xyz();
        return self.ctx.projection * eye_position;
    }

    fn fragment(&self, _bar: Vec3) -> Option<Color> {
        let normal = (self.tri_eye[1] - self.tri_eye[0])
            .cross(self.tri_eye[2] - self.tri_eye[0])
            .normalized();
        let diffuse = normal.dot(self.uniform_light).max(0.0);
        let level = (AMBIENT + 255.0 * diffuse).min(255.0) as u8;
        return Some(Color::new(level, level, level));
    }
}

/// Per-vertex diffuse intensity interpolated across the face with the
/// corrected weights, modulated onto the diffuse texture.
pub struct GouraudShader<'a, M: Model> {
    ctx: &'a RenderContext,
    model: &'a M,
    uniform_light: Vec3,
    /// Normals transform with the inverse-transpose of the vertex map;
    /// computed once per draw, not per vertex.
    uniform_it_modelview: Mat4,
    tri_intensity: Vec3,
    tri_uv: [Vec2; 3],
}

impl<'a, M: Model> GouraudShader<'a, M> {
    pub fn new(ctx: &'a RenderContext, model: &'a M, light: Vec3) -> GouraudShader<'a, M> {
        return GouraudShader {
            ctx,
            model,
            uniform_light: (ctx.modelview * light.extend(0.0)).xyz().normalized(),
            uniform_it_modelview: ctx.modelview.invert_transpose(),
            tri_intensity: Vec3::default(),
            tri_uv: [Vec2::default(); 3],
        };
    }
}

impl<'a, M: Model> Shader for GouraudShader<'a, M> {
    fn vertex(&mut self, face: usize, vert: usize) -> Vec4 {
        let normal = (self.uniform_it_modelview * self.model.normal(face, vert).extend(0.0))
            .xyz()
            .normalized();
        self.tri_intensity[vert] = normal.dot(self.uniform_light).max(0.0);
        self.tri_uv[vert] = self.model.uv(face, vert);

        let position = self.model.vertex(face, vert).extend(1.0);
        return self.ctx.projection * (self.ctx.modelview * position);
    }

    fn fragment(&self, bar: Vec3) -> Option<Color> {
        let intensity = self.tri_intensity.dot(bar);
        let uv = self.tri_uv[0] * bar.x + self.tri_uv[1] * bar.y + self.tri_uv[2] * bar.z;
        let base = self.model.diffuse(uv);
        return Some(Color::blend(base, Color::BLACK, intensity));
    }
}
