//! Color and depth storage for one render pass.
//!
//! Both buffers are owned, dense, row-major arrays addressed by (x, y)
//! with (0, 0) in the bottom-left corner. Out-of-range access is a
//! programming error and panics; it is never a recoverable condition.

use image::{ImageBuffer, Rgb, RgbImage};

/// Raw rgb8 pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        return Color { r, g, b };
    }

    /// Convex combination of two colors: t * c_1 + (1 - t) * c_2.
    /// t is unrestricted.
    pub fn blend(color_1: Color, color_2: Color, t: f64) -> Color {
        return Color {
            r: (t * color_1.r as f64 + (1.0 - t) * color_2.r as f64) as u8,
            g: (t * color_1.g as f64 + (1.0 - t) * color_2.g as f64) as u8,
            b: (t * color_1.b as f64 + (1.0 - t) * color_2.b as f64) as u8,
        };
    }
}

/// Render target: flat rgb8 array plus dimensions.
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Framebuffer {
    /// New framebuffer filled with the given color.
    pub fn new(width: u32, height: u32, fill: Color) -> Framebuffer {
        let mut fb = Framebuffer {
            width,
            height,
            data: vec![0; (3 * width * height) as usize],
        };
        fb.clear(fill);
        return fb;
    }

    pub fn width(&self) -> u32 {
        return self.width;
    }

    pub fn height(&self) -> u32 {
        return self.height;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        return (3 * (x + y * self.width)) as usize;
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        return Color::new(self.data[i], self.data[i + 1], self.data[i + 2]);
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Resets every pixel to the given color.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.data.chunks_exact_mut(3) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
    }

    /// Flat rgb8 view, bottom row first.
    pub fn as_raw(&self) -> &[u8] {
        return &self.data[..];
    }

    /// Copies out an image, flipping y so the buffer's bottom-left origin
    /// lands at the image convention's top-left.
    pub fn to_image(&self) -> RgbImage {
        return ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let color = self.get(x, self.height - 1 - y);
            Rgb([color.r, color.g, color.b])
        });
    }
}

/// Per-pixel nearest-depth-so-far record.
///
/// Convention: larger is nearer. The camera looks down the negative eye
/// z axis and the projection keeps that orientation, so NDC z grows
/// toward the viewer. Cells start at `f64::NEG_INFINITY` ("no geometry
/// yet") and the test in the rasterizer passes only when the candidate
/// depth is strictly larger than the stored value.
pub struct DepthBuffer {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> DepthBuffer {
        return DepthBuffer {
            width,
            height,
            data: vec![f64::NEG_INFINITY; (width * height) as usize],
        };
    }

    pub fn width(&self) -> u32 {
        return self.width;
    }

    pub fn height(&self) -> u32 {
        return self.height;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        return (x + y * self.width) as usize;
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        return self.data[self.index(x, y)];
    }

    pub fn set(&mut self, x: u32, y: u32, depth: f64) {
        let i = self.index(x, y);
        self.data[i] = depth;
    }

    /// Forgets all geometry: every cell back to the sentinel.
    pub fn clear(&mut self) {
        for cell in &mut self.data {
            *cell = f64::NEG_INFINITY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_interpolates_channels() {
        let mid = Color::blend(Color::WHITE, Color::BLACK, 0.5);
        assert_eq!(mid, Color::new(127, 127, 127));
        assert_eq!(Color::blend(Color::WHITE, Color::BLACK, 1.0), Color::WHITE);
        assert_eq!(Color::blend(Color::WHITE, Color::BLACK, 0.0), Color::BLACK);
    }

    #[test]
    fn framebuffer_set_then_get() {
        let mut fb = Framebuffer::new(4, 3, Color::BLACK);
        fb.set(2, 1, Color::new(10, 20, 30));
        assert_eq!(fb.get(2, 1), Color::new(10, 20, 30));
        assert_eq!(fb.get(0, 0), Color::BLACK);
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut fb = Framebuffer::new(2, 2, Color::BLACK);
        fb.set(1, 1, Color::WHITE);
        fb.clear(Color::new(5, 6, 7));
        for x in 0..2 {
            for y in 0..2 {
                assert_eq!(fb.get(x, y), Color::new(5, 6, 7));
            }
        }
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_pixel_panics() {
        let fb = Framebuffer::new(4, 3, Color::BLACK);
        fb.get(4, 0);
    }

    #[test]
    fn to_image_flips_y() {
        let mut fb = Framebuffer::new(2, 2, Color::BLACK);
        fb.set(0, 0, Color::WHITE);
        let img = fb.to_image();
        assert_eq!(img.get_pixel(0, 1).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn depth_buffer_starts_at_negative_infinity() {
        let mut depth = DepthBuffer::new(3, 3);
        assert_eq!(depth.get(1, 1), f64::NEG_INFINITY);
        depth.set(1, 1, 0.5);
        assert_eq!(depth.get(1, 1), 0.5);
        depth.clear();
        assert_eq!(depth.get(1, 1), f64::NEG_INFINITY);
    }
}
