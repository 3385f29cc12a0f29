use std::ops::{Div, Index, IndexMut, Mul};

use super::vector::{Vec2, Vec3, Vec4};

/// 1x1 matrix, the base case of the determinant recursion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat1(pub f64);

impl Mat1 {
    /// Determinant of a 1x1 matrix is its sole entry.
    pub fn det(self) -> f64 {
        return self.0;
    }
}

/// 2x2 matrix, stored as rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat2 {
    rows: [Vec2; 2],
}

/// 3x3 matrix, stored as rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat3 {
    rows: [Vec3; 3],
}

/// 4x4 matrix, stored as rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat4 {
    rows: [Vec4; 4],
}

/// Generates construction, row access and products for a square matrix type.
macro_rules! impl_matrix_ops {
    ($Mat:ident, $Vec:ident, $dim:expr) => {
        impl $Mat {
            pub const fn from_rows(rows: [$Vec; $dim]) -> $Mat {
                return $Mat { rows };
            }

            pub fn identity() -> $Mat {
                let mut ret = $Mat::default();
                for i in 0..$dim {
                    ret[i][i] = 1.0;
                }
                return ret;
            }

            pub fn transpose(&self) -> $Mat {
                let mut ret = $Mat::default();
                for i in 0..$dim {
                    for j in 0..$dim {
                        ret[i][j] = self[j][i];
                    }
                }
                return ret;
            }
        }

        impl Index<usize> for $Mat {
            type Output = $Vec;

            fn index(&self, row: usize) -> &$Vec {
                return &self.rows[row];
            }
        }

        impl IndexMut<usize> for $Mat {
            fn index_mut(&mut self, row: usize) -> &mut $Vec {
                return &mut self.rows[row];
            }
        }

        impl Mul<$Vec> for $Mat {
            type Output = $Vec;

            fn mul(self, rhs: $Vec) -> $Vec {
                let mut ret = $Vec::default();
                for i in 0..$dim {
                    ret[i] = self[i].dot(rhs);
                }
                return ret;
            }
        }

        impl Mul<$Mat> for $Mat {
            type Output = $Mat;

            fn mul(self, rhs: $Mat) -> $Mat {
                let mut ret = $Mat::default();
                for i in 0..$dim {
                    for j in 0..$dim {
                        for k in 0..$dim {
                            ret[i][j] += self[i][k] * rhs[k][j];
                        }
                    }
                }
                return ret;
            }
        }

        impl Div<f64> for $Mat {
            type Output = $Mat;

            fn div(self, rhs: f64) -> $Mat {
                let mut ret = self;
                for i in 0..$dim {
                    ret[i] = ret[i] / rhs;
                }
                return ret;
            }
        }
    };
}

impl_matrix_ops!(Mat2, Vec2, 2);
impl_matrix_ops!(Mat3, Vec3, 3);
impl_matrix_ops!(Mat4, Vec4, 4);

/// Generates the cofactor-expansion family on top of `minor`.
macro_rules! impl_cofactors {
    ($Mat:ident, $dim:expr) => {
        impl $Mat {
            /// Cofactor at (row, col): the minor's determinant with the
            /// checkerboard sign applied.
            pub fn cofactor(&self, row: usize, col: usize) -> f64 {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                return self.minor(row, col).det() * sign;
            }

            /// Determinant by cofactor expansion along the first row.
            pub fn det(&self) -> f64 {
                let mut ret = 0.0;
                for i in 0..$dim {
                    ret += self[0][i] * self.cofactor(0, i);
                }
                return ret;
            }

            /// Matrix of cofactors (the transposed adjugate).
            pub fn cofactors(&self) -> $Mat {
                let mut ret = $Mat::default();
                for i in 0..$dim {
                    for j in 0..$dim {
                        ret[i][j] = self.cofactor(i, j);
                    }
                }
                return ret;
            }

            /// Inverse of the transpose.
            ///
            /// The normalizer `cofactors[0] . self[0]` is the first-row
            /// cofactor expansion of the determinant, so no second
            /// determinant pass is needed. A singular matrix yields
            /// non-finite entries rather than an error; callers reject
            /// degenerate input before inverting.
            pub fn invert_transpose(&self) -> $Mat {
                let cofactors = self.cofactors();
                return cofactors / cofactors[0].dot(self[0]);
            }

            /// True inverse: the inverse-transpose, transposed back.
            pub fn invert(&self) -> $Mat {
                return self.invert_transpose().transpose();
            }
        }
    };
}

impl Mat2 {
    /// 1x1 submatrix with the given row and column removed.
    pub fn minor(&self, row: usize, col: usize) -> Mat1 {
        return Mat1(self[1 - row][1 - col]);
    }
}

/// Generates `minor` for matrices whose minors are themselves row matrices.
macro_rules! impl_minor {
    ($Mat:ident, $Minor:ident, $dim:expr) => {
        impl $Mat {
            /// Submatrix with the given row and column removed.
            pub fn minor(&self, row: usize, col: usize) -> $Minor {
                let mut ret = $Minor::default();
                for i in 0..$dim - 1 {
                    for j in 0..$dim - 1 {
                        let src_i = if i < row { i } else { i + 1 };
                        let src_j = if j < col { j } else { j + 1 };
                        ret[i][j] = self[src_i][src_j];
                    }
                }
                return ret;
            }
        }
    };
}

impl_minor!(Mat3, Mat2, 3);
impl_minor!(Mat4, Mat3, 4);

impl_cofactors!(Mat2, 2);
impl_cofactors!(Mat3, 3);
impl_cofactors!(Mat4, 4);

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample_mat3() -> Mat3 {
        return Mat3::from_rows([
            Vec3::new(2.0, -1.0, 0.5),
            Vec3::new(1.0, 3.0, -2.0),
            Vec3::new(0.0, 4.0, 1.0),
        ]);
    }

    fn sample_mat4() -> Mat4 {
        return Mat4::from_rows([
            Vec4::new(4.0, 0.0, 1.0, -1.0),
            Vec4::new(2.0, 5.0, 0.0, 3.0),
            Vec4::new(-1.0, 2.0, 6.0, 0.0),
            Vec4::new(0.0, 1.0, -2.0, 7.0),
        ]);
    }

    fn assert_mat3_eq(a: Mat3, b: Mat3, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a[i][j] - b[i][j]).abs() < tol,
                    "entry ({}, {}): {} vs {}",
                    i,
                    j,
                    a[i][j],
                    b[i][j]
                );
            }
        }
    }

    fn assert_mat4_eq(a: Mat4, b: Mat4, tol: f64) {
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (a[i][j] - b[i][j]).abs() < tol,
                    "entry ({}, {}): {} vs {}",
                    i,
                    j,
                    a[i][j],
                    b[i][j]
                );
            }
        }
    }

    #[test]
    fn det_base_cases() {
        assert_eq!(Mat1(7.0).det(), 7.0);
        let m = Mat2::from_rows([Vec2::new(3.0, 1.0), Vec2::new(2.0, 4.0)]);
        assert!((m.det() - 10.0).abs() < EPS);
    }

    #[test]
    fn det_matches_rule_of_sarrus() {
        let m = sample_mat3();
        // Computed by hand via Sarrus: 2(3+8) + 1(1-0) + 0.5(4-0).
        assert!((m.det() - 25.0).abs() < EPS);
    }

    #[test]
    fn singular_det_is_zero() {
        let m = Mat3::from_rows([
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0),
            Vec3::new(0.0, 1.0, 5.0),
        ]);
        assert!(m.det().abs() < EPS);
    }

    #[test]
    fn invert_times_self_is_identity() {
        let m = sample_mat3();
        assert_mat3_eq(m.invert() * m, Mat3::identity(), 1e-9);
        let m = sample_mat4();
        assert_mat4_eq(m.invert() * m, Mat4::identity(), 1e-9);
    }

    #[test]
    fn invert_transpose_is_transposed_inverse() {
        let m = sample_mat4();
        assert_mat4_eq(m.invert_transpose(), m.invert().transpose(), 1e-12);
    }

    #[test]
    fn cofactor_first_row_dot_recovers_det() {
        let m = sample_mat4();
        assert!((m.cofactors()[0].dot(m[0]) - m.det()).abs() < 1e-9);
    }

    #[test]
    fn transpose_involution() {
        let m = sample_mat4();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Mat3::identity();
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(m * v, v);
        let scale = Mat3::from_rows([
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
        ]);
        assert_eq!(scale * v, Vec3::new(2.0, -6.0, 12.0));
    }

    #[test]
    fn minor_removes_row_and_col() {
        let m = sample_mat3();
        let minor = m.minor(1, 0);
        assert_eq!(minor, Mat2::from_rows([Vec2::new(-1.0, 0.5), Vec2::new(4.0, 1.0)]));
    }

    // nalgebra as an independent oracle for the inversion chain.
    #[test]
    fn inverse_agrees_with_nalgebra() {
        let m = sample_mat4();
        let na_m = nalgebra::Matrix4::from_fn(|i, j| m[i][j]);
        let na_inv = na_m.try_inverse().unwrap();
        let inv = m.invert();
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv[i][j] - na_inv[(i, j)]).abs() < 1e-9);
            }
        }
    }
}
