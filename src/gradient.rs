//! Gradient samplers — map a normalized 2-D coordinate to a color.
//!
//! Four shapes: linear (ramp projected along an angled line), radial (ramp
//! by distance from a center), conical (ramp by angle around a center), and
//! bilinear (direct four-corner interpolation, no ramp).
//!
//! All samplers share the [`GradientSampler`] trait: `(u, v)` is the
//! position inside the shape with each axis in [0, 1] and `v = 0` at the
//! bottom edge; `aspect_ratio` is `width / height` of the target shape, so
//! angular and directional gradients are not skewed by non-square output.
//! Every sampler is a pure function of its inputs — same coordinate, same
//! color.

use crate::color::Rgba;
use crate::math::{calc_distance, sin_cos_degrees};
use crate::ramp::Ramp;

/// Per-pixel color function for a gradient shape.
///
/// Implementations must be total: any finite coordinate yields a color,
/// with out-of-range ramp positions clamped to the nearest edge sample.
pub trait GradientSampler {
    fn sample(&self, u: f64, v: f64, aspect_ratio: f64) -> Rgba;
}

// ============================================================================
// LinearGradient
// ============================================================================

/// Ramp projected along a gradient line at a fixed angle.
///
/// The angle is measured in degrees from the vertical axis, clockwise:
/// 0 degrees runs bottom-to-top, 90 degrees left-to-right. (This convention
/// differs from compass bearings and from the conical sweep; it is kept
/// as-is for compatibility with existing callers.)
pub struct LinearGradient<'a> {
    ramp: &'a Ramp,
    angle: f64,
}

impl<'a> LinearGradient<'a> {
    /// Gradient at the default angle of 0 degrees (bottom-to-top).
    pub fn new(ramp: &'a Ramp) -> Self {
        Self { ramp, angle: 0.0 }
    }

    pub fn with_angle(ramp: &'a Ramp, angle: f64) -> Self {
        Self { ramp, angle }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }
}

impl GradientSampler for LinearGradient<'_> {
    fn sample(&self, u: f64, v: f64, aspect_ratio: f64) -> Rgba {
        let (sin_a, cos_a) = sin_cos_degrees(self.angle);
        // Project the recentered coordinate onto the gradient direction,
        // normalized so the line spans the full shape at any aspect ratio:
        //   x = ((2u-1)*w*sin + (2v-1)*h*cos) / (w*|sin| + h*|cos|)
        // divided through by h, so only the aspect ratio enters. The
        // weights are computed first so that an axis-aligned gradient
        // degenerates to exactly u or v.
        let denom = aspect_ratio * sin_a.abs() + cos_a.abs();
        let wu = aspect_ratio * sin_a / denom;
        let wv = cos_a / denom;
        let x = (2.0 * u - 1.0) * wu + (2.0 * v - 1.0) * wv;
        self.ramp.sample((x + 1.0) / 2.0)
    }
}

// ============================================================================
// RadialGradient
// ============================================================================

/// Ramp by distance from a center point.
///
/// Position 0 of the ramp is the center, position 1 the nominal border;
/// everything beyond takes the ramp's last sample (clamp-to-edge). With the
/// default radius of 1.0 the ramp spans from the center to the nearest
/// edge midpoint. A radius of 0 or less degenerates to the ramp's
/// position-0 color filling the whole shape.
///
/// Distances are measured in normalized coordinates, so a non-square shape
/// stretches the circle into an ellipse; there is deliberately no aspect
/// correction here.
pub struct RadialGradient<'a> {
    ramp: &'a Ramp,
    center: (f64, f64),
    radius: f64,
}

impl<'a> RadialGradient<'a> {
    /// Gradient centered at (0.5, 0.5) with radius 1.0.
    pub fn new(ramp: &'a Ramp) -> Self {
        Self {
            ramp,
            center: (0.5, 0.5),
            radius: 1.0,
        }
    }

    pub fn with_params(ramp: &'a Ramp, center: (f64, f64), radius: f64) -> Self {
        Self {
            ramp,
            center,
            radius,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn set_center(&mut self, center: (f64, f64)) {
        self.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

impl GradientSampler for RadialGradient<'_> {
    fn sample(&self, u: f64, v: f64, _aspect_ratio: f64) -> Rgba {
        let factor = if self.radius <= 0.0 {
            0.0
        } else {
            2.0 / self.radius
        };
        let d = calc_distance(u, v, self.center.0, self.center.1) * factor;
        self.ramp.sample(d)
    }
}

// ============================================================================
// BilinearGradient
// ============================================================================

/// Four-corner interpolation; the only sampler that takes no ramp.
///
/// The horizontal mix happens along the top and bottom edges first, then
/// the two results are mixed vertically. Each channel, alpha included, is
/// interpolated independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearGradient {
    pub top_left: Rgba,
    pub top_right: Rgba,
    pub bottom_left: Rgba,
    pub bottom_right: Rgba,
}

impl BilinearGradient {
    pub fn new(top_left: Rgba, top_right: Rgba, bottom_left: Rgba, bottom_right: Rgba) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

impl Default for BilinearGradient {
    /// Green and yellow across the top, black and red across the bottom.
    fn default() -> Self {
        Self {
            top_left: Rgba::new_rgb(0.0, 1.0, 0.0),
            top_right: Rgba::new_rgb(1.0, 1.0, 0.0),
            bottom_left: Rgba::new_rgb(0.0, 0.0, 0.0),
            bottom_right: Rgba::new_rgb(1.0, 0.0, 0.0),
        }
    }
}

impl GradientSampler for BilinearGradient {
    fn sample(&self, u: f64, v: f64, _aspect_ratio: f64) -> Rgba {
        let top = self.top_left.gradient(&self.top_right, u);
        let bottom = self.bottom_left.gradient(&self.bottom_right, u);
        bottom.gradient(&top, v)
    }
}

// ============================================================================
// ConicalGradient
// ============================================================================

/// Ramp swept through a full turn around a center point.
///
/// The sweep starts and ends on the positive-x ray from the center (to the
/// right), so the ramp's position-0 and position-1 samples meet there and
/// the sweep midpoint sits on the opposite ray. A ramp whose first and last
/// stops differ shows a seam along the start ray; that is expected, not a
/// defect. The x axis is aspect-corrected so the sweep stays circular on
/// non-square output.
pub struct ConicalGradient<'a> {
    ramp: &'a Ramp,
    center: (f64, f64),
}

impl<'a> ConicalGradient<'a> {
    /// Gradient centered at (0.5, 0.5).
    pub fn new(ramp: &'a Ramp) -> Self {
        Self {
            ramp,
            center: (0.5, 0.5),
        }
    }

    pub fn with_center(ramp: &'a Ramp, center: (f64, f64)) -> Self {
        Self { ramp, center }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn set_center(&mut self, center: (f64, f64)) {
        self.center = center;
    }
}

impl GradientSampler for ConicalGradient<'_> {
    fn sample(&self, u: f64, v: f64, aspect_ratio: f64) -> Rgba {
        let px = (u - self.center.0) * 2.0 * aspect_ratio;
        let py = (v - self.center.1) * 2.0;
        // atan2 maps (-pi, pi] onto (0, 1]; the center itself
        // (atan2(-0.0, -0.0) = -pi) lands on the sweep start, keeping the
        // function total.
        let t = (-py).atan2(-px) / std::f64::consts::TAU + 0.5;
        self.ramp.sample(t)
    }
}

// ============================================================================
// Tests
// ============================================================================
