//! Camera and screen transform state for one render pass.

use crate::geometry::{Mat4, Vec3, Vec4};

/// The three pass-wide transform matrices.
///
/// Set once before a pass (or once per pass for multi-pass techniques such
/// as shadow mapping, where the second pass rebuilds the state around the
/// light's camera), then read by every vertex and fragment invocation.
/// Passed by reference instead of living in process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Camera placement: world space to eye space.
    pub modelview: Mat4,
    /// Perspective divide coefficient: eye space to clip space.
    pub projection: Mat4,
    /// NDC cube [-1, 1]^3 to the pixel rectangle.
    pub viewport: Mat4,
}

impl RenderContext {
    /// All three matrices start as identity.
    pub fn new() -> RenderContext {
        return RenderContext {
            modelview: Mat4::identity(),
            projection: Mat4::identity(),
            viewport: Mat4::identity(),
        };
    }

    /// Builds the ModelView matrix from an orthonormal camera basis:
    /// forward = eye - center, right = up x forward, true up closing the
    /// triad; composed with a translation by -eye.
    ///
    /// An `up` parallel to the view direction gives a zero-length cross
    /// product and a NaN basis. That is the caller's degeneracy to avoid,
    /// not handled here.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        let forward = (eye - center).normalized();
        let right = up.cross(forward).normalized();
        let true_up = forward.cross(right).normalized();
        let rotation = Mat4::from_rows([
            right.extend(0.0),
            true_up.extend(0.0),
            forward.extend(0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ]);
        let translation = Mat4::from_rows([
            Vec4::new(1.0, 0.0, 0.0, -eye.x),
            Vec4::new(0.0, 1.0, 0.0, -eye.y),
            Vec4::new(0.0, 0.0, 1.0, -eye.z),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ]);
        self.modelview = rotation * translation;
    }

    /// Pinhole-camera projection keyed off the distance to the look-at
    /// target: identity except entry (3, 2) = -1/f. A zero focal distance
    /// is a caller error.
    pub fn set_perspective(&mut self, focal_distance: f64) {
        debug_assert!(focal_distance != 0.0);
        let mut projection = Mat4::identity();
        projection[3][2] = -1.0 / focal_distance;
        self.projection = projection;
    }

    /// Maps NDC [-1, 1]^3 onto the pixel rectangle [x, x+w] x [y, y+h],
    /// leaving z untouched for the depth test.
    pub fn set_viewport(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.viewport = Mat4::from_rows([
            Vec4::new(w / 2.0, 0.0, 0.0, x + w / 2.0),
            Vec4::new(0.0, h / 2.0, 0.0, y + h / 2.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ]);
    }
}

impl Default for RenderContext {
    fn default() -> RenderContext {
        return RenderContext::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn look_at_places_origin_on_negative_forward_axis() {
        let mut ctx = RenderContext::new();
        ctx.look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let origin = ctx.modelview * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x).abs() < EPS);
        assert!((origin.y).abs() < EPS);
        assert!((origin.z + 5.0).abs() < EPS);
        assert!((origin.w - 1.0).abs() < EPS);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let mut ctx = RenderContext::new();
        ctx.look_at(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let rows: Vec<Vec3> = (0..3).map(|i| ctx.modelview[i].xyz()).collect();
        for i in 0..3 {
            assert!((rows[i].norm() - 1.0).abs() < EPS);
            for j in 0..i {
                assert!(rows[i].dot(rows[j]).abs() < EPS);
            }
        }
    }

    #[test]
    fn look_at_agrees_with_nalgebra_rotation() {
        let eye = Vec3::new(-1.0, 0.0, 2.0);
        let center = Vec3::new(0.0, 0.0, 0.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        let mut ctx = RenderContext::new();
        ctx.look_at(eye, center, up);

        // nalgebra's right-handed look-at also looks down -z, so the
        // rotation blocks must agree.
        let na_view = nalgebra::Isometry3::look_at_rh(
            &nalgebra::Point3::new(eye.x, eye.y, eye.z),
            &nalgebra::Point3::new(center.x, center.y, center.z),
            &nalgebra::Vector3::new(up.x, up.y, up.z),
        )
        .to_homogeneous();
        for i in 0..3 {
            for j in 0..3 {
                assert!((ctx.modelview[i][j] - na_view[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn perspective_divides_by_focal_distance() {
        let mut ctx = RenderContext::new();
        ctx.set_perspective(5.0);
        let p = ctx.projection * Vec4::new(0.0, 0.0, -5.0, 1.0);
        // w' = 1 - z/f.
        assert!((p.w - 2.0).abs() < EPS);
        assert!((p.z + 5.0).abs() < EPS);
    }

    #[test]
    fn viewport_maps_ndc_corners() {
        let mut ctx = RenderContext::new();
        ctx.set_viewport(10.0, 20.0, 100.0, 200.0);
        let low = ctx.viewport * Vec4::new(-1.0, -1.0, 0.0, 1.0);
        let high = ctx.viewport * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert!((low.x - 10.0).abs() < EPS && (low.y - 20.0).abs() < EPS);
        assert!((high.x - 110.0).abs() < EPS && (high.y - 220.0).abs() < EPS);
    }
}
