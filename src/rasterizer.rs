//! Triangle rasterization: bounding-box scan, perspective-correct
//! barycentric interpolation, depth test and shader dispatch.

use crate::buffer::{DepthBuffer, Framebuffer};
use crate::geometry::{Mat3, Vec2, Vec3, Vec4};
use crate::shader::Shader;
use crate::transform::RenderContext;

/// A triangle covering less than this much signed screen area (in pixels)
/// is skipped outright. The sign makes the same check cull backfaces, and
/// the magnitude throws away sub-pixel slivers along with truly degenerate
/// triangles. Several shading techniques rely on the culling side of this,
/// so the threshold stays as is.
const MIN_SIGNED_AREA: f64 = 1.0;

/// Barycentric weights of a screen point with respect to a triangle whose
/// corner matrix (rows [x, y, 1]) has already been inverted-transposed.
fn barycentric(inv_abc: &Mat3, p: Vec2) -> Vec3 {
    return *inv_abc * p.extend(1.0);
}

/// Rasterizes one triangle given in clip-space coordinates.
///
/// Screen points are derived as `viewport * (clip / clip.w)`; the original
/// clip w's survive for perspective correction and the NDC z's for the
/// depth test. For every covered pixel the depth is the *screen-linear*
/// interpolation of NDC z (the fixed-function convention), while the
/// weights handed to the fragment stage are perspective-corrected. Writes
/// happen only for fragments that pass the strict depth test and are not
/// discarded by the shader.
///
/// Degenerate geometry is silently culled, never an error. Each pixel's
/// color/depth write is independent of every other pixel of the same
/// triangle, so the scan over the bounding box is a candidate for a
/// data-parallel loop; triangles sharing a depth buffer must still be
/// processed one at a time.
pub fn rasterize<S: Shader>(
    ctx: &RenderContext,
    clip_verts: [Vec4; 3],
    shader: &S,
    framebuffer: &mut Framebuffer,
    depth_buffer: &mut DepthBuffer,
) {
    let ndc = clip_verts.map(|v| v / v.w);
    let screen = ndc.map(|v| (ctx.viewport * v).xy());

    let abc = Mat3::from_rows([
        screen[0].extend(1.0),
        screen[1].extend(1.0),
        screen[2].extend(1.0),
    ]);
    if abc.det() < MIN_SIGNED_AREA {
        return;
    }
    // Safe to invert now: the determinant is bounded away from zero.
    let inv_abc = abc.invert_transpose();
    let ndc_z = Vec3::new(ndc[0].z, ndc[1].z, ndc[2].z);

    let min_x = screen[0].x.min(screen[1].x).min(screen[2].x);
    let max_x = screen[0].x.max(screen[1].x).max(screen[2].x);
    let min_y = screen[0].y.min(screen[1].y).min(screen[2].y);
    let max_y = screen[0].y.max(screen[1].y).max(screen[2].y);
    let x_lo = (min_x as i64).max(0) as u32;
    let x_hi = (max_x as i64).min(framebuffer.width() as i64 - 1);
    let y_lo = (min_y as i64).max(0) as u32;
    let y_hi = (max_y as i64).min(framebuffer.height() as i64 - 1);
    if x_hi < 0 || y_hi < 0 {
        return;
    }

    for x in x_lo..=x_hi as u32 {
        for y in y_lo..=y_hi as u32 {
            let bc_screen = barycentric(&inv_abc, Vec2::new(x as f64, y as f64));
            if bc_screen.x < 0.0 || bc_screen.y < 0.0 || bc_screen.z < 0.0 {
                continue;
            }
            let fragment_depth = bc_screen.dot(ndc_z);
            // Larger NDC z is nearer; ties keep the earlier write.
            if fragment_depth <= depth_buffer.get(x, y) {
                continue;
            }
            // Screen-space weights are not affine in 3D under perspective;
            // divide by each vertex's clip w and renormalize.
            let bc_clip = Vec3::new(
                bc_screen.x / clip_verts[0].w,
                bc_screen.y / clip_verts[1].w,
                bc_screen.z / clip_verts[2].w,
            );
            let bc_clip = bc_clip / (bc_clip.x + bc_clip.y + bc_clip.z);
            match shader.fragment(bc_clip) {
                None => continue,
                Some(color) => {
                    depth_buffer.set(x, y, fragment_depth);
                    framebuffer.set(x, y, color);
                }
            }
        }
    }
}
