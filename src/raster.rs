//! Materialized raster output.
//!
//! [`render`] evaluates a sampler once per pixel of a W×H target and
//! collects the result into a [`Raster`] — a contiguous RGBA8 buffer,
//! row-major with the **bottom row first** (v = 0 is the bottom edge, the
//! same convention the samplers use). The pixel at (x, y) carries the
//! normalized coordinate `(x / (w-1), y / (h-1))`, so corner pixels sample
//! the exact corners of the shape; a 1-pixel-wide axis collapses to the
//! shape's midline.
//!
//! Rendering is deterministic and pixel-order independent: the same sampler
//! and dimensions always produce a byte-identical buffer.

use crate::color::Rgba8;
use crate::gradient::GradientSampler;
use crate::ramp::Ramp;

/// A W×H RGBA8 pixel buffer, row-major, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x`, row `y`, with row 0 at the bottom.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[(y * self.width + x) as usize]
    }

    /// All pixels, bottom row first.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// The buffer as raw RGBA bytes (4 bytes per pixel).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Rasterize `sampler` into a `width` × `height` buffer.
///
/// Dimensions must be positive; zero-sized targets are a caller contract
/// violation, not a recoverable error.
pub fn render<S: GradientSampler>(sampler: &S, width: u32, height: u32) -> Raster {
    debug_assert!(width > 0 && height > 0, "raster dimensions must be positive");
    let aspect_ratio = width as f64 / height as f64;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let v = normalized(y, height);
        for x in 0..width {
            let u = normalized(x, width);
            pixels.push(Rgba8::from(sampler.sample(u, v, aspect_ratio)));
        }
    }
    Raster {
        width,
        height,
        pixels,
    }
}

/// Bake a ramp into an R×1 texture-style raster.
///
/// Each ramp sample becomes one pixel, left-to-right. The degenerate
/// no-stops ramp bakes to a single opaque-white pixel.
pub fn render_ramp_texture(ramp: &Ramp) -> Raster {
    Raster {
        width: ramp.resolution() as u32,
        height: 1,
        pixels: ramp.samples().iter().map(|&c| Rgba8::from(c)).collect(),
    }
}

#[inline]
fn normalized(i: u32, extent: u32) -> f64 {
    if extent > 1 {
        i as f64 / (extent - 1) as f64
    } else {
        0.5
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::color_stop::ColorStop;
    use crate::gradient::{BilinearGradient, LinearGradient};

    #[test]
    fn test_raster_layout() {
        let g = BilinearGradient::new(
            Rgba::new(1.0, 0.0, 0.0, 1.0), // top left
            Rgba::new(0.0, 1.0, 0.0, 1.0), // top right
            Rgba::new(0.0, 0.0, 1.0, 1.0), // bottom left
            Rgba::new(1.0, 1.0, 1.0, 1.0), // bottom right
        );
        let raster = render(&g, 3, 3);
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixels().len(), 9);
        // Row 0 is the bottom row.
        assert_eq!(raster.pixel(0, 0), Rgba8::new(0, 0, 255, 255));
        assert_eq!(raster.pixel(2, 0), Rgba8::new(255, 255, 255, 255));
        assert_eq!(raster.pixel(0, 2), Rgba8::new(255, 0, 0, 255));
        assert_eq!(raster.pixel(2, 2), Rgba8::new(0, 255, 0, 255));
        assert_eq!(raster.pixels()[0], raster.pixel(0, 0));
    }

    #[test]
    fn test_as_bytes() {
        let g = BilinearGradient::new(Rgba::WHITE, Rgba::WHITE, Rgba::WHITE, Rgba::WHITE);
        let raster = render(&g, 2, 2);
        assert_eq!(raster.as_bytes(), &[255u8; 16]);
    }

    #[test]
    fn test_single_pixel_axis_samples_midline() {
        let ramp = Ramp::build(&[
            ColorStop::new(0.0, Rgba::BLACK),
            ColorStop::new(1.0, Rgba::WHITE),
        ])
        .unwrap();
        // A 1-wide column rendered with a horizontal gradient reads the
        // gradient midline everywhere.
        let g = LinearGradient::with_angle(&ramp, 90.0);
        let raster = render(&g, 1, 4);
        for y in 0..4 {
            assert_eq!(raster.pixel(0, y), Rgba8::new(128, 128, 128, 255));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let ramp = Ramp::build(&[
            ColorStop::new(0.0, Rgba::new(0.9, 0.1, 0.4, 1.0)),
            ColorStop::new(1.0, Rgba::new(0.0, 0.6, 0.8, 0.5)),
        ])
        .unwrap();
        let g = LinearGradient::with_angle(&ramp, 30.0);
        assert_eq!(render(&g, 33, 17), render(&g, 33, 17));
    }

    #[test]
    fn test_ramp_texture() {
        let ramp = Ramp::build(&[
            ColorStop::new(0.0, Rgba::BLACK),
            ColorStop::new(1.0, Rgba::WHITE),
        ])
        .unwrap();
        let tex = render_ramp_texture(&ramp);
        assert_eq!(tex.width(), 1024);
        assert_eq!(tex.height(), 1);
        assert_eq!(tex.pixel(0, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(tex.pixel(1023, 0), Rgba8::new(255, 255, 255, 255));
    }

    #[test]
    fn test_ramp_texture_degenerate() {
        let tex = render_ramp_texture(&Ramp::default());
        assert_eq!((tex.width(), tex.height()), (1, 1));
        assert_eq!(tex.as_bytes(), &[255u8; 4]);
    }
}
