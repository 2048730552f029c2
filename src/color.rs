//! Color types and interpolation.
//!
//! Two color types at different precisions:
//! - [`Rgba`] — f64 components in [0, 1]; the working type for all gradient
//!   math.
//! - [`Rgba8`] — u8 components; the output type for materialized rasters.
//!
//! Gradient interpolation is a naive per-channel linear mix: every channel,
//! including alpha, is interpolated independently. Colors are never
//! premultiplied and no gamma correction is applied.

use bytemuck::{Pod, Zeroable};

use crate::math::{clamp_unit, lerp, uround};

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque white — the color of the degenerate "no stops" ramp.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Construct with every channel clamped into [0, 1] (NaN maps to 0.0).
    pub fn new_clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Clamp every channel into [0, 1].
    pub fn clamped(&self) -> Self {
        Self::new_clamped(self.r, self.g, self.b, self.a)
    }

    /// Linear interpolation toward `c` by factor `k` in [0, 1].
    ///
    /// Each channel, alpha included, is mixed independently.
    #[inline]
    pub fn gradient(&self, c: &Rgba, k: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, c.r, k),
            g: lerp(self.g, c.g, k),
            b: lerp(self.b, c.b, k),
            a: lerp(self.a, c.a, k),
        }
    }
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
///
/// `Pod` so a pixel slice can be reinterpreted as raw bytes for upload or
/// comparison without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for Rgba8 {
    /// Convert by rounding each clamped channel to 8 bits
    /// (0.5 maps to 128, matching round-half-up).
    fn from(c: Rgba) -> Self {
        Self {
            r: uround(clamp_unit(c.r) * 255.0) as u8,
            g: uround(clamp_unit(c.g) * 255.0) as u8,
            b: uround(clamp_unit(c.b) * 255.0) as u8,
            a: uround(clamp_unit(c.a) * 255.0) as u8,
        }
    }
}

impl From<Rgba8> for Rgba {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
            a: c.a as f64 / 255.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
