//! Color stops — the anchors a gradient ramp is built from.

use crate::color::Rgba;
use crate::math::clamp_unit;

/// Hard cap on the number of stops accepted by a ramp build.
///
/// An implementation ceiling, not a mathematical one: more stops than ramp
/// samples cannot be represented anyway.
pub const MAX_COLOR_STOPS: usize = 1024;

/// A color at a position within a gradient.
///
/// `position` 0.0 is one edge of the gradient and 1.0 the other. The
/// constructor applies the boundary rule: positions above 1.0 default to
/// 1.0, positions below 0.0 (and NaN) default to 0.0; color channels are
/// clamped into [0, 1] the same way.
///
/// A collection of stops is unordered; the ramp builder sorts by position,
/// keeping input order among equal positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self {
            position: clamp_unit(position),
            color: color.clamped(),
        }
    }

    /// Re-apply the boundary rule. Used by the ramp builder so stops built
    /// via struct literal get the same treatment as constructed ones.
    pub(crate) fn normalized(&self) -> Self {
        Self::new(self.position, self.color)
    }
}

impl Default for ColorStop {
    /// White at position 0.0.
    fn default() -> Self {
        Self {
            position: 0.0,
            color: Rgba::WHITE,
        }
    }
}
