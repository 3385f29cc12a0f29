use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// 2D vector of f64.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// 3D vector of f64.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 4D vector of f64. In clip space `w` is the perspective divisor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Generates the arithmetic shared by all vector dimensions.
macro_rules! impl_vector {
    ($Vec:ident, $($field:ident => $i:literal),+) => {
        impl $Vec {
            pub const fn new($($field: f64),+) -> $Vec {
                return $Vec { $($field),+ };
            }

            /// Dot product.
            pub fn dot(self, rhs: $Vec) -> f64 {
                return 0.0 $(+ self.$field * rhs.$field)+;
            }

            /// Euclidean norm.
            pub fn norm(self) -> f64 {
                return self.dot(self).sqrt();
            }

            /// Vector scaled to unit length.
            ///
            /// A zero vector has no direction; the result then is all-NaN
            /// and propagates through downstream arithmetic. Callers guard
            /// degenerate input themselves.
            pub fn normalized(self) -> $Vec {
                return self / self.norm();
            }
        }

        impl Index<usize> for $Vec {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                match index {
                    $($i => &self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($Vec)),
                }
            }
        }

        impl IndexMut<usize> for $Vec {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                match index {
                    $($i => &mut self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($Vec)),
                }
            }
        }

        impl Add for $Vec {
            type Output = $Vec;

            fn add(self, rhs: $Vec) -> $Vec {
                return $Vec { $($field: self.$field + rhs.$field),+ };
            }
        }

        impl Sub for $Vec {
            type Output = $Vec;

            fn sub(self, rhs: $Vec) -> $Vec {
                return $Vec { $($field: self.$field - rhs.$field),+ };
            }
        }

        impl Neg for $Vec {
            type Output = $Vec;

            fn neg(self) -> $Vec {
                return $Vec { $($field: -self.$field),+ };
            }
        }

        impl Mul<f64> for $Vec {
            type Output = $Vec;

            fn mul(self, rhs: f64) -> $Vec {
                return $Vec { $($field: self.$field * rhs),+ };
            }
        }

        impl Div<f64> for $Vec {
            type Output = $Vec;

            fn div(self, rhs: f64) -> $Vec {
                return $Vec { $($field: self.$field / rhs),+ };
            }
        }
    };
}

impl_vector!(Vec2, x => 0, y => 1);
impl_vector!(Vec3, x => 0, y => 1, z => 2);
impl_vector!(Vec4, x => 0, y => 1, z => 2, w => 3);

impl Vec2 {
    /// Embeds into 3D with the given last component.
    pub const fn extend(self, z: f64) -> Vec3 {
        return Vec3 { x: self.x, y: self.y, z };
    }
}

impl Vec3 {
    /// Cross product.
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        return Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        };
    }

    /// Drops the last component.
    pub const fn xy(self) -> Vec2 {
        return Vec2 { x: self.x, y: self.y };
    }

    /// Embeds into homogeneous coordinates: w = 1 for points, 0 for directions.
    pub const fn extend(self, w: f64) -> Vec4 {
        return Vec4 { x: self.x, y: self.y, z: self.z, w };
    }
}

impl Vec4 {
    /// Drops the last two components.
    pub const fn xy(self) -> Vec2 {
        return Vec2 { x: self.x, y: self.y };
    }

    /// Drops the last component.
    pub const fn xyz(self) -> Vec3 {
        return Vec3 { x: self.x, y: self.y, z: self.z };
    }
}
