//! Gradient ramp — a 1-D color lookup table built from color stops.
//!
//! [`Ramp::build`] resolves an unordered stop list into a fixed-resolution
//! sequence of colors by piecewise-linear interpolation, and
//! [`Ramp::sample`] reads it back continuously with clamp-to-edge
//! semantics. Building is a pure function of the (clamped, sorted) stop
//! list, so ramps are safe to cache by stop content (see
//! [`crate::ramp_cache`]).

use thiserror::Error;

use crate::color::Rgba;
use crate::color_stop::{ColorStop, MAX_COLOR_STOPS};
use crate::math::clamp_unit;

/// Default ramp resolution (number of samples).
pub const RAMP_RESOLUTION: usize = 1024;

/// Errors reported by a ramp build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradientError {
    /// The stop collection exceeds [`MAX_COLOR_STOPS`].
    #[error("more than {} color stops is not supported (got {got})", MAX_COLOR_STOPS)]
    TooManyStops { got: usize },
}

/// A resolved 1-D gradient: `resolution` RGBA samples, where sample `i`
/// holds the gradient color at position `i / (resolution - 1)`.
///
/// The first sample always equals the color of the lowest-position stop and
/// the last sample the color of the highest-position stop (edge extension).
/// The degenerate no-stops ramp is a single opaque-white sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    samples: Vec<Rgba>,
}

impl Ramp {
    /// Build a ramp at the default resolution of [`RAMP_RESOLUTION`].
    pub fn build(stops: &[ColorStop]) -> Result<Self, GradientError> {
        Self::build_with_resolution(stops, RAMP_RESOLUTION)
    }

    /// Build a ramp with `resolution` samples (clamped to at least 2).
    ///
    /// Steps: reject oversized stop lists, clamp positions, stable-sort by
    /// position, extend the edges to cover [0, 1] with flat color, then
    /// interpolate each sample between its bracketing pair of stops. A
    /// zero-width bracket (coincident positions) resolves to the later
    /// stop's color.
    pub fn build_with_resolution(
        stops: &[ColorStop],
        resolution: usize,
    ) -> Result<Self, GradientError> {
        if stops.len() > MAX_COLOR_STOPS {
            return Err(GradientError::TooManyStops { got: stops.len() });
        }
        if stops.is_empty() {
            return Ok(Self::default());
        }

        let mut extended = canonical_stops(stops);
        let first = extended[0];
        if first.position != 0.0 {
            extended.insert(
                0,
                ColorStop {
                    position: 0.0,
                    color: first.color,
                },
            );
        }
        let last = extended[extended.len() - 1];
        if last.position != 1.0 {
            extended.push(ColorStop {
                position: 1.0,
                color: last.color,
            });
        }

        let resolution = resolution.max(2);
        let mut samples = Vec::with_capacity(resolution);
        let step = (resolution - 1) as f64;
        let mut lo = 0;
        for i in 0..resolution {
            let t = i as f64 / step;
            // Advance past every stop at or below t; a run of coincident
            // stops resolves to the last of the run (right-continuous).
            while lo + 2 < extended.len() && extended[lo + 1].position <= t {
                lo += 1;
            }
            let s0 = extended[lo];
            let s1 = extended[lo + 1];
            let width = s1.position - s0.position;
            let k = if width > 0.0 {
                ((t - s0.position) / width).min(1.0)
            } else {
                1.0
            };
            samples.push(s0.color.gradient(&s1.color, k));
        }
        Ok(Self { samples })
    }

    /// Continuous clamp-to-edge lookup at position `t`.
    ///
    /// `t` is clamped into [0, 1]; the result is the linear interpolation
    /// between the two nearest samples (the software equivalent of a
    /// linearly filtered 1-D texture fetch).
    pub fn sample(&self, t: f64) -> Rgba {
        let n = self.samples.len();
        if n == 1 {
            return self.samples[0];
        }
        let x = clamp_unit(t) * (n - 1) as f64;
        let i = (x as usize).min(n - 2);
        self.samples[i].gradient(&self.samples[i + 1], x - i as f64)
    }

    /// Number of samples.
    pub fn resolution(&self) -> usize {
        self.samples.len()
    }

    /// The resolved samples, in position order.
    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    pub fn first_sample(&self) -> Rgba {
        self.samples[0]
    }

    pub fn last_sample(&self) -> Rgba {
        self.samples[self.samples.len() - 1]
    }
}

impl Default for Ramp {
    /// The "no gradient configured" ramp: a single opaque-white sample.
    fn default() -> Self {
        Self {
            samples: vec![Rgba::WHITE],
        }
    }
}

/// Clamp and stable-sort a stop list into its canonical build order.
///
/// This is the form ramp builds (and cache keys) are defined over: positions
/// put through the boundary rule, then sorted ascending with ties keeping
/// input order.
pub(crate) fn canonical_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted: Vec<ColorStop> = stops.iter().map(ColorStop::normalized).collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

// ============================================================================
// Tests
// ============================================================================
